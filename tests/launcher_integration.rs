// Integration tests for the launcher session over season files on disk

use std::fs;

use replay_launcher::launcher::{GRID_COLUMNS, NO_DATA_MESSAGE};
use replay_launcher::{
    FileScheduleProvider, GridView, LauncherError, LauncherSession, ProcessSpawner,
    ReplayCommand, ReplayConfig, ReplayHandle, ScheduleProvider, SeasonSelection, SessionState,
};
use tempfile::TempDir;

/// Counts spawns instead of starting processes
#[derive(Default)]
struct CountingSpawner {
    launched: Vec<Vec<String>>,
}

impl ProcessSpawner for CountingSpawner {
    fn spawn(&mut self, command: &ReplayCommand) -> Result<ReplayHandle, LauncherError> {
        self.launched.push(command.arguments());
        Ok(ReplayHandle {
            pid: 1000 + self.launched.len() as u32,
            year: command.year,
            round: command.round,
        })
    }
}

/// Wraps a provider and counts lookups
struct CountingProvider<P> {
    inner: P,
    calls: usize,
}

impl<P: ScheduleProvider> ScheduleProvider for CountingProvider<P> {
    fn get_schedule(&mut self, year: i32) -> Vec<replay_launcher::RaceEvent> {
        self.calls += 1;
        self.inner.get_schedule(year)
    }
}

fn season_json(year: i32, rounds: u32) -> String {
    let events: Vec<String> = (1..=rounds)
        .rev()
        .map(|round| {
            format!(
                r#"{{"RoundNumber": {round}, "Country": "Country {round}", "EventDate": "{year}-04-{day:02}", "Location": "Track {round}", "OfficialName": "GRAND PRIX {round} {year}", "Flag": "🏁"}}"#,
                day = round.min(28)
            )
        })
        .collect();
    format!("[{}]", events.join(","))
}

fn schedule_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("2023.json"), season_json(2023, 3)).unwrap();
    fs::write(temp_dir.path().join("2024.json"), season_json(2024, 24)).unwrap();
    fs::write(temp_dir.path().join("2021.json"), "this is not json").unwrap();
    temp_dir
}

fn session(
    temp_dir: &TempDir,
) -> LauncherSession<CountingProvider<FileScheduleProvider>, CountingSpawner> {
    LauncherSession::new(
        CountingProvider {
            inner: FileScheduleProvider::new(temp_dir.path().to_path_buf()),
            calls: 0,
        },
        CountingSpawner::default(),
        ReplayConfig::default(),
        SeasonSelection::new(2026),
    )
}

#[test]
fn test_three_round_season_fills_first_row() {
    let temp_dir = schedule_dir();
    let mut session = session(&temp_dir);

    let grid = session.select_year("2023").unwrap();
    let cards = grid.cards();
    assert_eq!(cards.len(), 3);
    let layout: Vec<(u32, usize, usize)> = cards
        .iter()
        .map(|c| (c.round_number, c.row, c.column))
        .collect();
    assert_eq!(layout, vec![(1, 0, 0), (2, 0, 1), (3, 0, 2)]);
    assert_eq!(cards[0].date, "01 Apr 2023");
}

#[test]
fn test_full_season_layout() {
    let temp_dir = schedule_dir();
    let mut session = session(&temp_dir);

    let grid = session.select_year("2024").unwrap();
    assert_eq!(grid.cards().len(), 24);
    assert_eq!(grid.rows().len(), 24 / GRID_COLUMNS);
    let rounds: Vec<u32> = grid.cards().iter().map(|c| c.round_number).collect();
    assert_eq!(rounds, (1..=24).collect::<Vec<u32>>());
}

#[test]
fn test_missing_and_corrupt_seasons_show_placeholder() {
    let temp_dir = schedule_dir();
    let mut session = session(&temp_dir);

    for year in ["2019", "2021"] {
        let grid = session.select_year(year).unwrap();
        assert_eq!(grid, &GridView::Placeholder(NO_DATA_MESSAGE.to_string()));
        assert!(grid.cards().is_empty());
    }
}

#[test]
fn test_garbage_input_keeps_previous_grid() {
    let temp_dir = schedule_dir();
    let mut session = session(&temp_dir);
    session.select_year("2023").unwrap();
    let before = session.grid().cloned();

    for input in ["", "abc", "20 23", "2023x", "-", "1900", "2100"] {
        assert!(session.select_year(input).is_err());
        assert_eq!(session.grid().cloned(), before);
    }
    // rejected input never reaches the provider
    assert_eq!(session.provider_mut().calls, 1);
}

#[test]
fn test_reselecting_a_season_is_stable() {
    let temp_dir = schedule_dir();
    let mut session = session(&temp_dir);

    let first = session.select_year("2023").unwrap().clone();
    fs::remove_file(temp_dir.path().join("2023.json")).unwrap();
    session.select_year("2024").unwrap();
    let again = session.select_year("2023").unwrap().clone();

    assert_eq!(first, again);
    assert_eq!(session.provider_mut().calls, 3);
}

#[test]
fn test_activation_spawns_exactly_once() {
    let temp_dir = schedule_dir();
    let mut spawner = CountingSpawner::default();
    {
        let mut session = LauncherSession::new(
            FileScheduleProvider::new(temp_dir.path().to_path_buf()),
            &mut spawner,
            ReplayConfig::default(),
            SeasonSelection::new(2026),
        );
        session.select_year("2024").unwrap();

        let handle = session.activate(12).unwrap();
        assert_eq!((handle.year, handle.round), (2024, 12));
        assert_eq!(
            session.state(),
            &SessionState::Terminated {
                year: 2024,
                round: 12
            }
        );

        assert!(matches!(
            session.activate(13),
            Err(LauncherError::SessionTerminated)
        ));
        assert!(session.select_year("2023").is_err());
    }

    assert_eq!(
        spawner.launched,
        vec![vec!["main.py", "--year", "2024", "--round", "12"]]
    );
}

#[test]
fn test_activation_arguments() {
    let temp_dir = schedule_dir();
    let mut spawner = CountingSpawner::default();
    {
        let mut session = LauncherSession::new(
            FileScheduleProvider::new(temp_dir.path().to_path_buf()),
            &mut spawner,
            ReplayConfig {
                program: "replay-viewer".into(),
                args: vec!["--fullscreen".to_string()],
                working_dir: None,
            },
            SeasonSelection::new(2026),
        );
        session.select_year("2023").unwrap();
        session.activate(3).unwrap();
    }

    assert_eq!(
        spawner.launched,
        vec![vec!["--fullscreen", "--year", "2023", "--round", "3"]]
    );
}

#[test]
fn test_unknown_round_spawns_nothing() {
    let temp_dir = schedule_dir();
    let mut spawner = CountingSpawner::default();
    {
        let mut session = LauncherSession::new(
            FileScheduleProvider::new(temp_dir.path().to_path_buf()),
            &mut spawner,
            ReplayConfig::default(),
            SeasonSelection::new(2026),
        );
        session.select_year("2019").unwrap();
        assert!(matches!(
            session.activate(1),
            Err(LauncherError::UnknownRound { year: 2019, round: 1 })
        ));
        assert!(!session.is_terminated());
    }

    assert!(spawner.launched.is_empty());
}
