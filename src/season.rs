// Year selector model

use chrono::Datelike;
use log::{debug, warn};

use crate::errors::LauncherError;

/// Oldest season the replay viewer has data for
pub const FIRST_SEASON: i32 = 2018;
/// Season picked on startup when the range contains it
pub const PREFERRED_SEASON: i32 = 2025;

/// Range of seasons offered by the year selector and the season currently picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSelection {
    first: i32,
    last: i32,
    selected: i32,
}

impl SeasonSelection {
    /// Range `FIRST_SEASON..=current_year + 1`, starting on the default season.
    pub fn new(current_year: i32) -> Self {
        let first = FIRST_SEASON;
        let last = (current_year + 1).max(first);
        let selected = Self::default_for(first, last, current_year);
        Self {
            first,
            last,
            selected,
        }
    }

    pub fn for_today() -> Self {
        Self::new(chrono::Local::now().year())
    }

    fn default_for(first: i32, last: i32, current_year: i32) -> i32 {
        if (first..=last).contains(&PREFERRED_SEASON) {
            PREFERRED_SEASON
        } else {
            current_year.clamp(first, last)
        }
    }

    /// Years offered by the selector, newest first
    pub fn years(&self) -> Vec<i32> {
        (self.first..=self.last).rev().collect()
    }

    pub fn first(&self) -> i32 {
        self.first
    }

    pub fn last(&self) -> i32 {
        self.last
    }

    pub fn default_year(&self) -> i32 {
        Self::default_for(self.first, self.last, self.last - 1)
    }

    /// Startup season: `requested` when it is offered, the default season otherwise.
    pub fn initial_year(&self, requested: Option<i32>) -> i32 {
        match requested {
            Some(year) if self.contains(year) => year,
            Some(year) => {
                warn!(
                    "Startup season {} is outside {}-{}, showing {} instead",
                    year,
                    self.first,
                    self.last,
                    self.default_year()
                );
                self.default_year()
            }
            None => self.default_year(),
        }
    }

    pub fn selected(&self) -> i32 {
        self.selected
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Validate selector text without changing the selection.
    pub fn parse(&self, input: &str) -> Result<i32, LauncherError> {
        let trimmed = input.trim();
        let year = trimmed
            .parse::<i32>()
            .map_err(|_| LauncherError::InvalidYear {
                input: input.to_string(),
            })?;

        if !self.contains(year) {
            return Err(LauncherError::YearOutOfRange {
                year,
                first: self.first,
                last: self.last,
            });
        }
        Ok(year)
    }

    /// Parse selector text and make it the current selection.
    pub fn select(&mut self, input: &str) -> Result<i32, LauncherError> {
        let year = self.parse(input)?;
        debug!("Season {} selected", year);
        self.selected = year;
        Ok(year)
    }
}
