// Error types for the replay launcher

use snafu::Snafu;
use std::{io, path::PathBuf};

#[derive(Debug, Snafu)]
pub enum LauncherError {
    // Year selector errors
    #[snafu(display("Invalid year: {input}"))]
    InvalidYear { input: String },
    #[snafu(display("Year {year} is outside the supported range {first}-{last}"))]
    YearOutOfRange { year: i32, first: i32, last: i32 },

    // Schedule loading errors
    #[snafu(display("Error reading schedule file {}", path.display()))]
    ScheduleIOError { path: PathBuf, source: io::Error },
    #[snafu(display("Error parsing schedule file {}", path.display()))]
    ScheduleParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[snafu(display("Schedule file for {expected} contains the {found} season"))]
    ScheduleYearMismatch { expected: i32, found: i32 },

    // Config management errors
    #[snafu(display("Could not find application data directory"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // Asset errors
    #[snafu(display("Failed to load font: {}", path.display()))]
    FontLoadError { path: PathBuf, source: io::Error },
    #[snafu(display("Not a usable TTF/OTF font: {}", path.display()))]
    InvalidFontFile {
        path: PathBuf,
        source: ab_glyph::InvalidFont,
    },

    // Window errors
    #[snafu(display("Could not open the launcher window"))]
    WindowError { source: eframe::Error },

    // Replay launch errors
    #[snafu(display("Could not start replay process {program}"))]
    SpawnFailed { program: String, source: io::Error },
    #[snafu(display("Round {round} is not part of the {year} calendar"))]
    UnknownRound { year: i32, round: u32 },
    #[snafu(display("No season loaded"))]
    NoSeasonSelected,
    #[snafu(display("Launcher already handed off to the replay process"))]
    SessionTerminated,
}

impl From<eframe::Error> for LauncherError {
    fn from(value: eframe::Error) -> Self {
        LauncherError::WindowError { source: value }
    }
}

impl LauncherError {
    /// Errors caused by what the user typed in the year selector.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LauncherError::InvalidYear { .. } | LauncherError::YearOutOfRange { .. }
        )
    }
}
