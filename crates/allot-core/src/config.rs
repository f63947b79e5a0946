//! Runtime configuration: week convention and snapshot storage location.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;

use crate::{
    calendar::Week,
    error::{AllotError, Result, ResultExt},
    models::WeekStart,
    store::FileStore,
};

const APP_PREFIX: &str = "allot";
const CONFIG_FILE: &str = "config.json";
const STORE_DIR: &str = "store";

/// Resolved settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub week_start: WeekStart,
    pub state_dir: PathBuf,
}

impl Config {
    /// Snapshot store rooted at the configured state directory.
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.state_dir)
    }

    /// The week containing now in the system time zone.
    pub fn current_week(&self) -> Result<Week> {
        Week::current(self.week_start)
    }
}

/// Optional settings read from `config.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    week_start: Option<WeekStart>,
    state_dir: Option<PathBuf>,
}

/// Builder resolving a [`Config`].
///
/// Explicit values win over the config file, which wins over defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    week_start: Option<WeekStart>,
    state_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory holding wizard snapshots.
    ///
    /// If not specified, uses `$XDG_STATE_HOME/allot/store` or
    /// `~/.local/state/allot/store`.
    pub fn with_state_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.state_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    pub fn with_week_start(mut self, week_start: Option<WeekStart>) -> Self {
        if week_start.is_some() {
            self.week_start = week_start;
        }
        self
    }

    /// Reads settings from `path` instead of `$XDG_CONFIG_HOME/allot/config.json`.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AllotError::FileSystem` if the config file cannot be read,
    /// `AllotError::Configuration` if it is not valid JSON and
    /// `AllotError::XdgDirectory` if the default state directory cannot be
    /// created.
    pub fn build(self) -> Result<Config> {
        let settings = match self.config_file.or_else(Self::default_config_file) {
            Some(path) => Self::read_settings(&path)?,
            None => FileSettings::default(),
        };

        let week_start = self
            .week_start
            .or(settings.week_start)
            .unwrap_or_default();
        let state_dir = match self.state_dir.or(settings.state_dir) {
            Some(dir) => dir,
            None => Self::default_state_dir()?,
        };

        debug!(
            "Using week start '{}' and state directory {}",
            week_start.as_str(),
            state_dir.display()
        );
        Ok(Config {
            week_start,
            state_dir,
        })
    }

    fn read_settings(path: &Path) -> Result<FileSettings> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config file at {}", path.display());
                return Ok(FileSettings::default());
            }
            Err(e) => return Err(AllotError::file_system(path, e)),
        };
        serde_json::from_str(&contents)
            .with_context_lazy(|| format!("Invalid config file {}", path.display()))
    }

    fn default_config_file() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX).find_config_file(CONFIG_FILE)
    }

    fn default_state_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .create_state_directory(STORE_DIR)
            .map_err(|e| AllotError::XdgDirectory(e.to_string()))
    }
}
