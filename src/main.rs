mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{LevelFilter, error};

use replay_launcher::{
    AppConfig, FileScheduleProvider, LauncherError, LauncherSession, ScheduleProvider,
    SeasonSelection, SystemSpawner,
};
use ui::LauncherApp;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Directory holding `<year>.json` season files
    #[arg(short, long, global = true)]
    schedule_dir: Option<PathBuf>,

    /// Directory holding the calendar fonts
    #[arg(long, global = true)]
    font_dir: Option<PathBuf>,

    /// Executable started for the selected race
    #[arg(short, long, global = true)]
    replay_program: Option<PathBuf>,

    /// Season shown on startup
    #[arg(short, long)]
    year: Option<i32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a season calendar without opening the launcher
    Schedule {
        #[arg(short, long)]
        year: i32,
    },
    /// List the seasons that have a schedule file
    Seasons,
    /// Write the effective configuration to the config file
    InitConfig,
}

fn effective_config(args: &Args) -> AppConfig {
    let mut app_config = AppConfig::load_or_default();
    if let Some(dir) = &args.schedule_dir {
        app_config.schedule_dir = Some(dir.clone());
    }
    if let Some(dir) = &args.font_dir {
        app_config.font_dir = Some(dir.clone());
    }
    if let Some(program) = &args.replay_program {
        app_config.replay.program = program.clone();
    }
    app_config
}

fn schedule_provider(app_config: &AppConfig) -> Result<FileScheduleProvider, LauncherError> {
    match &app_config.schedule_dir {
        Some(dir) => Ok(FileScheduleProvider::new(dir.clone())),
        None => FileScheduleProvider::new_default(),
    }
}

fn launcher(app_config: AppConfig, initial_year: Option<i32>) -> Result<(), LauncherError> {
    let provider = schedule_provider(&app_config)?;
    let session = LauncherSession::new(
        provider,
        SystemSpawner,
        app_config.replay.clone(),
        SeasonSelection::for_today(),
    );
    let initial_year = initial_year.or(app_config.default_year);

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_title("F1 Race Replay Launcher")
        .with_inner_size(app_config.window_size.clone());

    eframe::run_native(
        "F1 Race Replay Launcher",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(LauncherApp::new(
                session,
                &app_config,
                initial_year,
                cc,
            )))
        }),
    )?;
    Ok(())
}

fn print_schedule(app_config: &AppConfig, year: i32) -> Result<(), LauncherError> {
    let mut provider = schedule_provider(app_config)?;
    let events = provider.get_schedule(year);
    if events.is_empty() {
        println!("{}", replay_launcher::launcher::NO_DATA_MESSAGE);
        return Ok(());
    }
    for event in events {
        println!(
            "ROUND {:>2}  {}  {:<15} {:<14} {:<14} {}",
            event.round_number,
            event.flag,
            event.country,
            event.location,
            event.event_date,
            event.official_name
        );
    }
    Ok(())
}

fn list_seasons(app_config: &AppConfig) -> Result<(), LauncherError> {
    let provider = schedule_provider(app_config)?;
    let seasons = provider.available_seasons()?;
    if seasons.is_empty() {
        println!("No schedule files in {:?}", provider.schedule_dir());
    }
    for year in seasons {
        println!("{}", year);
    }
    Ok(())
}

fn main() {
    let mut builder = colog::default_builder();
    #[cfg(debug_assertions)]
    builder.filter_level(LevelFilter::Debug);
    #[cfg(not(debug_assertions))]
    builder.filter_level(LevelFilter::Info);
    builder.init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .unwrap_or_else(|e| error!("Could not set Ctrl-C handler: {}", e));

    let app_config = effective_config(&cli);
    let result = match &cli.command {
        None => launcher(app_config, cli.year),
        Some(Commands::Schedule { year }) => print_schedule(&app_config, *year),
        Some(Commands::Seasons) => list_seasons(&app_config),
        Some(Commands::InitConfig) => app_config.save(),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
