use serde::{Deserialize, Serialize};

pub const DEFAULT_FLAG: &str = "🏁";

fn default_flag() -> String {
    DEFAULT_FLAG.to_string()
}

/// A single race weekend in a season calendar.
///
/// Records are produced by a [`super::ScheduleProvider`] and only read by the launcher.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RaceEvent {
    pub round_number: u32,
    pub country: String,
    pub event_date: String,
    pub location: String,
    pub official_name: String,
    #[serde(default = "default_flag")]
    pub flag: String,
}

impl RaceEvent {
    pub fn new(
        round_number: u32,
        country: impl Into<String>,
        event_date: impl Into<String>,
        location: impl Into<String>,
        official_name: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            round_number,
            country: country.into(),
            event_date: event_date.into(),
            location: location.into(),
            official_name: official_name.into(),
            flag: flag.into(),
        }
    }
}

/// On-disk layout of a season file: either a bare list of events or a list tagged with its year.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum SeasonFile {
    Events(Vec<RaceEvent>),
    Tagged {
        #[serde(rename = "Year")]
        year: i32,
        #[serde(rename = "Events")]
        events: Vec<RaceEvent>,
    },
}

impl SeasonFile {
    pub(crate) fn year(&self) -> Option<i32> {
        match self {
            SeasonFile::Tagged { year, .. } => Some(*year),
            SeasonFile::Events(_) => None,
        }
    }

    pub(crate) fn into_events(self) -> Vec<RaceEvent> {
        match self {
            SeasonFile::Tagged { events, .. } => events,
            SeasonFile::Events(events) => events,
        }
    }
}
