// Window-independent launcher state: calendar grid and replay hand-off

use itertools::Itertools;
use log::{info, warn};

use crate::errors::LauncherError;
use crate::replay::{ProcessSpawner, ReplayConfig, ReplayHandle};
use crate::schedule::{RaceEvent, ScheduleProvider};
use crate::season::SeasonSelection;

pub const GRID_COLUMNS: usize = 3;
pub const NO_DATA_MESSAGE: &str = "No data found or error loading schedule.";

/// Everything a race card displays, plus its cell in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub year: i32,
    pub round_number: u32,
    pub row: usize,
    pub column: usize,
    pub round_label: String,
    pub header: String,
    pub subtitle: String,
    pub location: String,
    pub date: String,
}

impl CardView {
    fn from_event(year: i32, index: usize, event: &RaceEvent) -> Self {
        Self {
            year,
            round_number: event.round_number,
            row: index / GRID_COLUMNS,
            column: index % GRID_COLUMNS,
            round_label: format!("ROUND {}", event.round_number),
            header: format!("{}  {}", event.flag, event.country),
            subtitle: event.official_name.clone(),
            location: event.location.clone(),
            date: event.event_date.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Cards(Vec<CardView>),
    Placeholder(String),
}

impl GridView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            GridView::Cards(cards) => cards,
            GridView::Placeholder(_) => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, GridView::Placeholder(_))
    }

    pub fn card_for_round(&self, round: u32) -> Option<&CardView> {
        self.cards().iter().find(|c| c.round_number == round)
    }

    /// Cards grouped by grid row, in display order
    pub fn rows(&self) -> Vec<Vec<&CardView>> {
        self.cards()
            .chunks(GRID_COLUMNS)
            .map(|row| row.iter().collect_vec())
            .collect()
    }
}

/// Lay the events out row-major in `GRID_COLUMNS` columns, keeping their order.
pub fn render_grid(year: i32, events: &[RaceEvent]) -> GridView {
    if events.is_empty() {
        return GridView::Placeholder(NO_DATA_MESSAGE.to_string());
    }
    GridView::Cards(
        events
            .iter()
            .enumerate()
            .map(|(i, event)| CardView::from_event(year, i, event))
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Loading { year: i32 },
    Populated { year: i32, grid: GridView },
    /// The replay process took over. Nothing else happens in this session.
    Terminated { year: i32, round: u32 },
}

/// `LauncherSession` drives the launcher: it loads a season into a grid of cards and hands the
/// selected race over to the replay process.
///
/// # Type parameters
///
/// * `P` - where season calendars come from.
/// * `S` - how the replay process is started.
pub struct LauncherSession<P: ScheduleProvider, S: ProcessSpawner> {
    provider: P,
    spawner: S,
    replay_config: ReplayConfig,
    selection: SeasonSelection,
    state: SessionState,
}

impl<P: ScheduleProvider, S: ProcessSpawner> LauncherSession<P, S> {
    pub fn new(
        provider: P,
        spawner: S,
        replay_config: ReplayConfig,
        selection: SeasonSelection,
    ) -> Self {
        Self {
            provider,
            spawner,
            replay_config,
            selection,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn selection(&self) -> &SeasonSelection {
        &self.selection
    }

    pub fn grid(&self) -> Option<&GridView> {
        match &self.state {
            SessionState::Populated { grid, .. } => Some(grid),
            _ => None,
        }
    }

    pub fn current_year(&self) -> Option<i32> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Loading { year }
            | SessionState::Populated { year, .. }
            | SessionState::Terminated { year, .. } => Some(*year),
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, SessionState::Terminated { .. })
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Load the season named by the selector text and replace the grid with it.
    ///
    /// Text that is not a year in the offered range is rejected and leaves the current grid
    /// untouched.
    pub fn select_year(&mut self, input: &str) -> Result<&GridView, LauncherError> {
        if self.is_terminated() {
            return Err(LauncherError::SessionTerminated);
        }

        let year = self.selection.select(input).inspect_err(|e| {
            warn!("Ignoring year selection: {}", e);
        })?;

        info!("Loading schedule for {}...", year);
        self.state = SessionState::Loading { year };
        let events = self.provider.get_schedule(year);
        let grid = render_grid(year, &events);
        self.state = SessionState::Populated { year, grid };

        self.grid().ok_or(LauncherError::NoSeasonSelected)
    }

    /// Start the replay for `round` of the loaded season.
    ///
    /// On success the session is terminated. A spawn failure leaves the grid in place so the
    /// caller can report it.
    pub fn activate(&mut self, round: u32) -> Result<ReplayHandle, LauncherError> {
        let year = match &self.state {
            SessionState::Terminated { .. } => return Err(LauncherError::SessionTerminated),
            SessionState::Idle | SessionState::Loading { .. } => {
                return Err(LauncherError::NoSeasonSelected);
            }
            SessionState::Populated { year, grid } => {
                if grid.card_for_round(round).is_none() {
                    return Err(LauncherError::UnknownRound { year: *year, round });
                }
                *year
            }
        };

        let command = self.replay_config.command_for(year, round);
        let handle = self.spawner.spawn(&command)?;
        info!(
            "Replay for {} round {} started with pid {}",
            year, round, handle.pid
        );
        self.state = SessionState::Terminated { year, round };
        Ok(handle)
    }
}
