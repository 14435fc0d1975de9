// Library interface for the replay launcher
// The egui shell in main.rs and the integration tests build on these modules

pub mod config;
pub mod errors;
pub mod fonts;
pub mod launcher;
pub mod replay;
pub mod schedule;
pub mod season;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::LauncherError;
pub use launcher::{CardView, GridView, LauncherSession, SessionState, render_grid};
pub use replay::{ProcessSpawner, ReplayCommand, ReplayConfig, ReplayHandle, SystemSpawner};
pub use schedule::{FileScheduleProvider, InMemoryScheduleProvider, RaceEvent, ScheduleProvider};
pub use season::SeasonSelection;
