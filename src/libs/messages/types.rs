use crate::libs::error::Field;
use serde::{Deserialize, Serialize};

/// Every user-facing line the application prints.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String), // id
    DemoTaskSkipped(String), // title

    // === VALIDATION MESSAGES ===
    EmptyField(Field),
    InvalidDateFormat(String),
    InvalidPriority(String),
    DuplicateTask(String), // title

    // === STORE MESSAGES ===
    StoreMissing(String),             // path
    StoreLoaded(usize, String),       // count, path
    StoreSaved(usize, String),        // count, path
    StoreReadFailed(String, String),  // path, error
    StoreNotAnArray(String),          // path
    StoreInvalidRecord(String, usize, String), // path, index, error
    StoreWriteFailed(String, String), // path, error

    // === CONFIGURATION MESSAGES ===
    ConfigFileNotFound(String), // path
    ConfigLoaded(String),       // path
    ConfigReadFailed(String, String), // path, error
    ConfigSaved(String),        // path
}

/// Language used when rendering a [`Message`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}
