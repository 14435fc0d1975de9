// Replay process launch

use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::LauncherError;

/// How the replay viewer is started. The season arguments are appended to `args`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ReplayConfig {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("python3"),
            args: vec!["main.py".to_string()],
            working_dir: None,
        }
    }
}

impl ReplayConfig {
    pub fn command_for(&self, year: i32, round: u32) -> ReplayCommand {
        ReplayCommand {
            program: self.program.clone(),
            base_args: self.args.clone(),
            working_dir: self.working_dir.clone(),
            year,
            round,
        }
    }
}

/// A fully resolved replay invocation for one race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayCommand {
    pub program: PathBuf,
    pub base_args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub year: i32,
    pub round: u32,
}

impl ReplayCommand {
    /// Full argument vector: configured arguments then `--year <Y> --round <R>`
    pub fn arguments(&self) -> Vec<String> {
        let mut args = self.base_args.clone();
        args.extend([
            "--year".to_string(),
            self.year.to_string(),
            "--round".to_string(),
            self.round.to_string(),
        ]);
        args
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.arguments()).stdin(Stdio::null());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

/// A replay process that has been started. The launcher never waits on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayHandle {
    pub pid: u32,
    pub year: i32,
    pub round: u32,
}

pub trait ProcessSpawner {
    fn spawn(&mut self, command: &ReplayCommand) -> Result<ReplayHandle, LauncherError>;
}

impl<S: ProcessSpawner + ?Sized> ProcessSpawner for &mut S {
    fn spawn(&mut self, command: &ReplayCommand) -> Result<ReplayHandle, LauncherError> {
        (**self).spawn(command)
    }
}

/// Starts replay processes as detached OS children.
#[derive(Default, Debug)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&mut self, command: &ReplayCommand) -> Result<ReplayHandle, LauncherError> {
        info!(
            "Launching race: Year {}, Round {}",
            command.year, command.round
        );
        // dropping the Child leaves the process running
        let child = command
            .to_command()
            .spawn()
            .map_err(|e| LauncherError::SpawnFailed {
                program: command.program.display().to_string(),
                source: e,
            })?;

        Ok(ReplayHandle {
            pid: child.id(),
            year: command.year,
            round: command.round,
        })
    }
}
