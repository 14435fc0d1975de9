// Season schedule lookup

pub mod storage;
pub mod types;

pub use storage::{FileScheduleProvider, InMemoryScheduleProvider};
pub use types::{DEFAULT_FLAG, RaceEvent};

use chrono::NaiveDate;
use log::warn;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// Source of season calendars.
///
/// An empty result means no data is available for the year, whatever the reason. Implementations
/// log their own failures and never surface them to the caller.
pub trait ScheduleProvider {
    /// Events of the season ordered by ascending round number
    fn get_schedule(&mut self, year: i32) -> Vec<RaceEvent>;
}

impl<P: ScheduleProvider + ?Sized> ScheduleProvider for Box<P> {
    fn get_schedule(&mut self, year: i32) -> Vec<RaceEvent> {
        (**self).get_schedule(year)
    }
}

/// Puts raw events into calendar order.
///
/// Events are sorted by round, round 0 and repeated rounds are dropped (the first occurrence of a
/// round wins) and ISO dates are rewritten in display form.
pub fn normalize_schedule(events: Vec<RaceEvent>) -> Vec<RaceEvent> {
    let mut events = events;
    // stable, so the first occurrence of a duplicated round stays in front
    events.sort_by_key(|e| e.round_number);

    let mut normalized: Vec<RaceEvent> = Vec::with_capacity(events.len());
    for mut event in events {
        if event.round_number == 0 {
            warn!("Dropping event {} with round number 0", event.official_name);
            continue;
        }
        if normalized
            .last()
            .is_some_and(|prev| prev.round_number == event.round_number)
        {
            warn!(
                "Dropping duplicate round {}: {}",
                event.round_number, event.official_name
            );
            continue;
        }
        event.event_date = display_date(&event.event_date);
        normalized.push(event);
    }
    normalized
}

/// Rewrites `YYYY-MM-DD` as `DD Mon YYYY`, leaves anything else alone.
pub fn display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT) {
        Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
