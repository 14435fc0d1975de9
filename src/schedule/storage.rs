// Schedule providers backed by season files and by memory

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use super::types::{RaceEvent, SeasonFile};
use super::{ScheduleProvider, normalize_schedule};
use crate::errors::LauncherError;

const SCHEDULE_FILE_EXTENSION: &str = "json";

/// Reads season calendars from `<year>.json` files in a directory.
pub struct FileScheduleProvider {
    /// Directory holding one file per season
    schedule_dir: PathBuf,
    /// Every answer given so far, empty ones included, keyed by year
    cache: HashMap<i32, Vec<RaceEvent>>,
}

impl FileScheduleProvider {
    pub fn new(schedule_dir: PathBuf) -> Self {
        Self {
            schedule_dir,
            cache: HashMap::new(),
        }
    }

    /// Create a provider reading from the default application data directory
    pub fn new_default() -> Result<Self, LauncherError> {
        Ok(Self::new(Self::default_schedule_dir()?))
    }

    pub fn default_schedule_dir() -> Result<PathBuf, LauncherError> {
        let app_data_dir = dirs::data_dir().ok_or(LauncherError::NoConfigDir)?;
        Ok(app_data_dir.join("replay-launcher").join("schedules"))
    }

    pub fn schedule_dir(&self) -> &Path {
        &self.schedule_dir
    }

    pub fn file_path_for_season(&self, year: i32) -> PathBuf {
        self.schedule_dir
            .join(format!("{}.{}", year, SCHEDULE_FILE_EXTENSION))
    }

    /// Read and normalize one season file without touching the cache
    pub fn load_season(&self, year: i32) -> Result<Vec<RaceEvent>, LauncherError> {
        let file_path = self.file_path_for_season(year);

        if !file_path.exists() {
            debug!("No schedule file for {}: {:?}", year, file_path);
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&file_path).map_err(|e| LauncherError::ScheduleIOError {
                path: file_path.clone(),
                source: e,
            })?;

        let season: SeasonFile =
            serde_json::from_str(&content).map_err(|e| LauncherError::ScheduleParseError {
                path: file_path.clone(),
                source: e,
            })?;

        if let Some(found) = season.year() {
            if found != year {
                return Err(LauncherError::ScheduleYearMismatch {
                    expected: year,
                    found,
                });
            }
        }

        Ok(normalize_schedule(season.into_events()))
    }

    /// Years that have a season file, newest first
    pub fn available_seasons(&self) -> Result<Vec<i32>, LauncherError> {
        if !self.schedule_dir.exists() {
            return Ok(Vec::new());
        }

        let entries =
            fs::read_dir(&self.schedule_dir).map_err(|e| LauncherError::ScheduleIOError {
                path: self.schedule_dir.clone(),
                source: e,
            })?;

        let mut years: Vec<i32> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(SCHEDULE_FILE_EXTENSION)
            })
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(|s| s.parse::<i32>().ok())
            })
            .collect();

        years.sort_unstable_by(|a, b| b.cmp(a));
        Ok(years)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl ScheduleProvider for FileScheduleProvider {
    fn get_schedule(&mut self, year: i32) -> Vec<RaceEvent> {
        if let Some(events) = self.cache.get(&year) {
            debug!("Found schedule in cache for {}", year);
            return events.clone();
        }

        let events = match self.load_season(year) {
            Ok(events) => {
                info!("Loaded {} events for the {} season", events.len(), year);
                events
            }
            Err(e) => {
                error!("Error loading schedule for {}: {}", year, e);
                Vec::new()
            }
        };

        self.cache.insert(year, events.clone());
        events
    }
}

/// Fixed set of calendars held in memory.
#[derive(Default, Debug, Clone)]
pub struct InMemoryScheduleProvider {
    seasons: HashMap<i32, Vec<RaceEvent>>,
}

impl InMemoryScheduleProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_season(mut self, year: i32, events: Vec<RaceEvent>) -> Self {
        self.insert_season(year, events);
        self
    }

    pub fn insert_season(&mut self, year: i32, events: Vec<RaceEvent>) {
        self.seasons.insert(year, normalize_schedule(events));
    }
}

impl ScheduleProvider for InMemoryScheduleProvider {
    fn get_schedule(&mut self, year: i32) -> Vec<RaceEvent> {
        self.seasons.get(&year).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SEASON_2023: &str = r#"[
        {"RoundNumber": 2, "Country": "Saudi Arabia", "EventDate": "2023-03-19", "Location": "Jeddah", "OfficialName": "FORMULA 1 STC SAUDI ARABIAN GRAND PRIX 2023", "Flag": "🇸🇦"},
        {"RoundNumber": 1, "Country": "Bahrain", "EventDate": "2023-03-05", "Location": "Sakhir", "OfficialName": "FORMULA 1 GULF AIR BAHRAIN GRAND PRIX 2023", "Flag": "🇧🇭"},
        {"RoundNumber": 3, "Country": "Australia", "EventDate": "2023-04-02", "Location": "Melbourne", "OfficialName": "FORMULA 1 ROLEX AUSTRALIAN GRAND PRIX 2023", "Flag": "🇦🇺"}
    ]"#;

    fn write_season(dir: &TempDir, year: i32, content: &str) {
        fs::write(dir.path().join(format!("{}.json", year)), content).unwrap();
    }

    #[test]
    fn test_load_season_orders_rounds() {
        let temp_dir = TempDir::new().unwrap();
        write_season(&temp_dir, 2023, SEASON_2023);
        let mut provider = FileScheduleProvider::new(temp_dir.path().to_path_buf());

        let events = provider.get_schedule(2023);
        let rounds: Vec<u32> = events.iter().map(|e| e.round_number).collect();
        assert_eq!(rounds, vec![1, 2, 3]);
        assert_eq!(events[0].country, "Bahrain");
        assert_eq!(events[0].event_date, "05 Mar 2023");
    }

    #[test]
    fn test_missing_season_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut provider = FileScheduleProvider::new(temp_dir.path().to_path_buf());

        assert!(provider.get_schedule(2099).is_empty());
        assert!(provider.load_season(2099).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_season_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        write_season(&temp_dir, 2021, "{ not json");
        let mut provider = FileScheduleProvider::new(temp_dir.path().to_path_buf());

        assert!(matches!(
            provider.load_season(2021),
            Err(LauncherError::ScheduleParseError { .. })
        ));
        assert!(provider.get_schedule(2021).is_empty());
    }

    #[test]
    fn test_tagged_season_year_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        write_season(&temp_dir, 2022, r#"{"Year": 2021, "Events": []}"#);
        let mut provider = FileScheduleProvider::new(temp_dir.path().to_path_buf());

        assert!(matches!(
            provider.load_season(2022),
            Err(LauncherError::ScheduleYearMismatch {
                expected: 2022,
                found: 2021
            })
        ));
        assert!(provider.get_schedule(2022).is_empty());
    }

    #[test]
    fn test_tagged_season_loads() {
        let temp_dir = TempDir::new().unwrap();
        let content = format!(r#"{{"Year": 2023, "Events": {}}}"#, SEASON_2023);
        write_season(&temp_dir, 2023, &content);
        let mut provider = FileScheduleProvider::new(temp_dir.path().to_path_buf());

        assert_eq!(provider.get_schedule(2023).len(), 3);
    }

    #[test]
    fn test_cache_keeps_answers_stable() {
        let temp_dir = TempDir::new().unwrap();
        let mut provider = FileScheduleProvider::new(temp_dir.path().to_path_buf());

        // an empty answer is cached too
        assert!(provider.get_schedule(2023).is_empty());
        write_season(&temp_dir, 2023, SEASON_2023);
        assert!(provider.get_schedule(2023).is_empty());

        provider.clear_cache();
        assert_eq!(provider.get_schedule(2023).len(), 3);

        // file removal is invisible until the cache is cleared
        fs::remove_file(provider.file_path_for_season(2023)).unwrap();
        assert_eq!(provider.get_schedule(2023).len(), 3);
    }

    #[test]
    fn test_available_seasons() {
        let temp_dir = TempDir::new().unwrap();
        write_season(&temp_dir, 2019, "[]");
        write_season(&temp_dir, 2023, SEASON_2023);
        fs::write(temp_dir.path().join("notes.json"), "[]").unwrap();
        fs::write(temp_dir.path().join("2020.txt"), "[]").unwrap();
        let provider = FileScheduleProvider::new(temp_dir.path().to_path_buf());

        assert_eq!(provider.available_seasons().unwrap(), vec![2023, 2019]);
    }

    #[test]
    fn test_available_seasons_without_directory() {
        let temp_dir = TempDir::new().unwrap();
        let provider = FileScheduleProvider::new(temp_dir.path().join("missing"));

        assert!(provider.available_seasons().unwrap().is_empty());
    }

    #[test]
    fn test_in_memory_provider() {
        let mut provider = InMemoryScheduleProvider::new().with_season(
            2023,
            vec![
                RaceEvent::new(2, "Saudi Arabia", "19 Mar 2023", "Jeddah", "", "🇸🇦"),
                RaceEvent::new(1, "Bahrain", "05 Mar 2023", "Sakhir", "", "🇧🇭"),
            ],
        );

        let rounds: Vec<u32> = provider
            .get_schedule(2023)
            .iter()
            .map(|e| e.round_number)
            .collect();
        assert_eq!(rounds, vec![1, 2]);
        assert!(provider.get_schedule(2024).is_empty());
    }
}
