use std::path::{Path, PathBuf};

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::LauncherError;
use crate::replay::ReplayConfig;

const CONFIG_DIR_NAME: &str = "replay-launcher";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1000.,
            height: 700.,
        }
    }
}

impl From<WindowSize> for egui::Vec2 {
    fn from(value: WindowSize) -> Self {
        egui::Vec2::new(value.width, value.height)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Where `<year>.json` season files live, the data directory when unset
    pub schedule_dir: Option<PathBuf>,
    /// Where the calendar fonts live, `<exe>/../fonts` when unset
    pub font_dir: Option<PathBuf>,
    pub replay: ReplayConfig,
    pub window_size: WindowSize,
    /// Season shown on startup instead of the selector default
    pub default_year: Option<i32>,
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf, LauncherError> {
        Ok(dirs::config_dir()
            .ok_or(LauncherError::NoConfigDir)?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    pub fn from_path(config_path: &Path) -> Result<Option<Self>, LauncherError> {
        if !config_path.exists() {
            return Ok(None);
        }
        let file = std::fs::File::open(config_path)
            .map_err(|e| LauncherError::ConfigIOError { source: e })?;
        let config = serde_json::from_reader(file)
            .map_err(|e| LauncherError::ConfigSerializeError { source: e })?;
        Ok(Some(config))
    }

    pub fn from_local_file() -> Result<Option<Self>, LauncherError> {
        Self::from_path(&Self::config_path()?)
    }

    /// The stored config, or the defaults when there is none or it can't be read
    pub fn load_or_default() -> Self {
        match Self::from_local_file() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                error!("Error while reading config file, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), LauncherError> {
        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| LauncherError::ConfigIOError { source: e })?;
            }
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| LauncherError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| LauncherError::ConfigSerializeError { source: e })?;
        info!("Saved config to {:?}", config_path);
        Ok(())
    }

    pub fn save(&self) -> Result<(), LauncherError> {
        self.save_to(&Self::config_path()?)
    }
}
