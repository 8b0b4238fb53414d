use super::repository::TaskRepository;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::RepositoryError;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskCollection};
use crate::{msg_debug, msg_error, msg_warning};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Task store backed by a single JSON array file.
#[derive(Debug, Clone)]
pub struct JsonTaskRepository {
    path: PathBuf,
}

impl JsonTaskRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonTaskRepository { path: path.into() }
    }

    /// Binds the repository to the configured store file inside `storage`.
    pub fn from_config(config: &Config, storage: &DataStorage) -> Self {
        Self::new(storage.get_path(&config.db_file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the store, reporting exactly why it could not be used.
    ///
    /// `Ok(None)` means the file does not exist. A single record that does not
    /// decode as a task fails the whole load with [`RepositoryError::Record`].
    pub fn try_load(&self) -> Result<Option<TaskCollection>, RepositoryError> {
        let Some(records) = self.read_records()? else {
            return Ok(None);
        };

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| self.decode(index, record))
            .collect::<Result<TaskCollection, _>>()
            .map(Some)
    }

    fn read_records(&self) -> Result<Option<Vec<Value>>, RepositoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(RepositoryError::Read { path: self.path.clone(), source }),
        };

        let value: Value =
            serde_json::from_str(&raw).map_err(|source| RepositoryError::Parse { path: self.path.clone(), source })?;
        match value {
            Value::Array(records) => Ok(Some(records)),
            _ => Err(RepositoryError::NotAnArray { path: self.path.clone() }),
        }
    }

    fn decode(&self, index: usize, record: Value) -> Result<Task, RepositoryError> {
        serde_json::from_value(record).map_err(|source| RepositoryError::Record { path: self.path.clone(), index, source })
    }

    /// Fails if the file on disk is an array holding a record that would be lost by overwriting it.
    fn check_overwritable(&self) -> Result<(), RepositoryError> {
        // Missing, unreadable or non-array stores are replaced as a whole.
        let Ok(Some(records)) = self.read_records() else {
            return Ok(());
        };

        for (index, record) in records.into_iter().enumerate() {
            self.decode(index, record)?;
        }
        Ok(())
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl TaskRepository for JsonTaskRepository {
    /// Loads every record that decodes as a task. Undecodable records are
    /// skipped with a warning and keep the store from being overwritten.
    fn load(&self) -> TaskCollection {
        match self.read_records() {
            Ok(Some(records)) => {
                let mut tasks = TaskCollection::with_capacity(records.len());
                for (index, record) in records.into_iter().enumerate() {
                    match self.decode(index, record) {
                        Ok(task) => tasks.push(task),
                        Err(e) => msg_warning!(e),
                    }
                }
                msg_debug!(Message::StoreLoaded(tasks.len(), self.display_path()));
                tasks
            }
            Ok(None) => {
                msg_debug!(Message::StoreMissing(self.display_path()));
                TaskCollection::new()
            }
            Err(e) => {
                msg_warning!(e);
                TaskCollection::new()
            }
        }
    }

    fn save(&self, tasks: &TaskCollection) -> Result<(), RepositoryError> {
        let result = self.check_overwritable().and_then(|()| {
            let json = serde_json::to_string_pretty(tasks)
                .map_err(|source| RepositoryError::Serialize { path: self.path.clone(), source })?;
            fs::write(&self.path, json).map_err(|source| RepositoryError::Write { path: self.path.clone(), source })
        });

        match &result {
            Ok(()) => msg_debug!(Message::StoreSaved(tasks.len(), self.display_path())),
            Err(e) => msg_error!(e),
        }
        result
    }
}
