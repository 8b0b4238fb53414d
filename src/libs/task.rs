//! Task record and its closed enumerations.
//!
//! A [`Task`] is stored as a flat JSON object whose fields are all strings,
//! so priorities, statuses and timestamps serialize as plain text labels.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Format of the `due_date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO 8601 local date-time without offset, used for `created_at` and `last_updated_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The only accepted priority labels, compared by exact match.
pub const PRIORITY_LABELS: [&str; 3] = ["Low", "Medium", "High"];

/// The whole persisted store, kept in insertion order.
pub type TaskCollection = Vec<Task>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => PRIORITY_LABELS[0],
            Priority::Medium => PRIORITY_LABELS[1],
            Priority::High => PRIORITY_LABELS[2],
        }
    }
}

impl FromStr for Priority {
    type Err = ();

    /// Parses a priority label. No trimming or case folding is applied.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not completed")]
    NotCompleted,
    #[serde(rename = "Completed")]
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    pub created_at: String,
    pub last_updated_at: String,
}

impl Task {
    /// Builds a fresh task with a random id, default status and both
    /// timestamps set to the current local time.
    pub fn new(title: &str, description: &str, due_date: NaiveDate, priority: Priority) -> Self {
        let now = Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string();
        Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            due_date: due_date.format(DATE_FORMAT).to_string(),
            priority,
            status: TaskStatus::default(),
            created_at: now.clone(),
            last_updated_at: now,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_labels_round_trip() {
        for label in PRIORITY_LABELS {
            let priority: Priority = label.parse().unwrap();
            assert_eq!(priority.label(), label);
        }
    }

    #[test]
    fn status_serializes_as_label() {
        let json = serde_json::to_string(&TaskStatus::NotCompleted).unwrap();
        assert_eq!(json, "\"Not completed\"");
    }

    #[test]
    fn null_description_loads_as_empty() {
        let json = r#"{
            "id": "1", "title": "t", "description": null, "due_date": "2025-07-20",
            "priority": "Low", "status": "Not completed",
            "created_at": "2025-07-01T10:00:00", "last_updated_at": "2025-07-01T10:00:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "");
    }
}
