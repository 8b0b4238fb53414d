//! Error types for task validation and persistence.
//!
//! Every variant renders through [`Message`], so the text a user sees for an
//! error is the same localized line printed by the task manager.

use crate::libs::messages::Message;
use std::path::PathBuf;
use thiserror::Error;

/// Required input fields of a new task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    DueDate,
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{}", Message::EmptyField(.0.clone()))]
    EmptyField(Field),

    #[error("{}", Message::InvalidDateFormat(.0.clone()))]
    InvalidDateFormat(String),

    #[error("{}", Message::InvalidPriority(.0.clone()))]
    InvalidPriority(String),

    #[error("{}", Message::DuplicateTask(.title.clone()))]
    DuplicateTask { title: String, due_date: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{}", Message::StoreReadFailed(.path.display().to_string(), .source.to_string()))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", Message::StoreReadFailed(.path.display().to_string(), .source.to_string()))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}", Message::StoreInvalidRecord(.path.display().to_string(), .index.clone(), .source.to_string()))]
    Record {
        path: PathBuf,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}", Message::StoreNotAnArray(.path.display().to_string()))]
    NotAnArray { path: PathBuf },

    #[error("{}", Message::StoreWriteFailed(.path.display().to_string(), .source.to_string()))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", Message::StoreWriteFailed(.path.display().to_string(), .source.to_string()))]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
