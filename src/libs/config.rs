//! Configuration management for the ptm application.
//!
//! Configuration is optional. When `ptm.json` is absent from the working
//! directory every setting falls back to its default, so a bare `ptm add`
//! works out of the box.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "db_file_name": "tasks_database.json",
//!   "language": "en"
//! }
//! ```
//!
//! Both keys are optional. `language` accepts `en` or `vi`.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use ptm::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Tasks are stored in {}", config.db_file_name);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::{Language, Message};
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name, resolved against the data storage base directory.
pub const CONFIG_FILE_NAME: &str = "ptm.json";

/// Default name of the JSON file that holds the task collection.
pub const DB_FILE_NAME: &str = "tasks_database.json";

/// Main configuration container for the application.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Name (or path) of the backing task store.
    ///
    /// Relative names are resolved against the working directory.
    pub db_file_name: String,

    /// Language used for every user-facing message.
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_file_name: DB_FILE_NAME.to_string(),
            language: Language::default(),
        }
    }
}

impl Config {
    /// Reads `ptm.json` from the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    /// A missing file is not an error and yields the defaults.
    pub fn read() -> Result<Config> {
        Self::read_in(&DataStorage::new())
    }

    /// Reads the configuration file from the given storage location.
    pub fn read_in(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME);
        let display_path = config_file_path.display().to_string();

        if !config_file_path.exists() {
            msg_debug!(Message::ConfigFileNotFound(display_path));
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)
            .map_err(|e| msg_error_anyhow!(Message::ConfigReadFailed(display_path.clone(), e.to_string())))?;
        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| msg_error_anyhow!(Message::ConfigReadFailed(display_path.clone(), e.to_string())))?;

        msg_debug!(Message::ConfigLoaded(display_path));
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save_in(&self, storage: &DataStorage) -> Result<()> {
        let config_file = File::create(storage.get_path(CONFIG_FILE_NAME))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }
}
