use crate::db::DEFAULT_EVENT_LIMIT;
use crate::errors::{AppError, AppResult};
use crate::utils::path::absolutize;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Events listed under the `stats` counters unless `--recent` is given.
/// Larger than [`crate::db::DEFAULT_RECENT_LIMIT`], the bare store default.
pub const DEFAULT_DASHBOARD_RECENT: usize = 10;

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "GATELOG_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Rows shown by `history` when --limit is not given.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Events shown under the dashboard counters.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Ask before deleting an entity or wiping the history.
    #[serde(default = "default_confirm_deletes")]
    pub confirm_deletes: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_history_limit() -> usize {
    DEFAULT_EVENT_LIMIT
}
fn default_recent_limit() -> usize {
    DEFAULT_DASHBOARD_RECENT
}
fn default_confirm_deletes() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            history_limit: default_history_limit(),
            recent_limit: default_recent_limit(),
            confirm_deletes: default_confirm_deletes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gatelog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".gatelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gatelog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("gatelog.sqlite")
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load the standard configuration file.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Create the config directory and file, and resolve the database path.
    ///
    /// A relative `custom_db` is taken from the current directory and stored
    /// as an absolute path. With `is_test` the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if is_test {
            Config::default()
        } else {
            Self::load()?
        };

        if let Some(name) = custom_db {
            config.database = absolutize(name)?.to_string_lossy().to_string();
        }

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
