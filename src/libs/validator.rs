//! Validation pipeline for new tasks.
//!
//! [`TaskManager::add_new_task`] checks its inputs in a fixed order and stops
//! at the first failure:
//!
//! 1. title is not blank
//! 2. due date is not blank
//! 3. due date is a real `YYYY-MM-DD` calendar date
//! 4. priority is one of the known labels
//! 5. no stored task has the same title (ignoring case) and due date
//!
//! Only after all checks pass is the collection appended to and saved.
//! Every failure prints its message to stdout and leaves the store untouched.

use crate::db::repository::TaskRepository;
use crate::libs::error::{Field, TaskError};
use crate::libs::messages::{self, Message};
use crate::libs::task::{Priority, Task, DATE_FORMAT};
use crate::{msg_print, msg_success};
use chrono::NaiveDate;

pub struct TaskManager<R: TaskRepository> {
    repository: R,
}

impl<R: TaskRepository> TaskManager<R> {
    pub fn new(repository: R) -> Self {
        TaskManager { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validates the inputs, appends a new task to the store and returns it.
    ///
    /// The title is stored trimmed. A missing description is stored as an
    /// empty string.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, or [`TaskError::Repository`] if
    /// the updated collection could not be written. In the latter case the
    /// store still holds its previous contents.
    pub fn add_new_task(&self, title: &str, description: Option<&str>, due_date: &str, priority: &str) -> Result<Task, TaskError> {
        let result = self.try_add(title, description.unwrap_or_default(), due_date, priority);

        match &result {
            Ok(task) => msg_success!(Message::TaskAdded(task.id.clone())),
            // Write failures were already reported by the repository.
            Err(TaskError::Repository(_)) => {}
            Err(e) => msg_print!(messages::error(e)),
        }
        result
    }

    fn try_add(&self, title: &str, description: &str, due_date: &str, priority: &str) -> Result<Task, TaskError> {
        if is_blank(title) {
            return Err(TaskError::EmptyField(Field::Title));
        }
        if is_blank(due_date) {
            return Err(TaskError::EmptyField(Field::DueDate));
        }
        let due = parse_due_date(due_date)?;
        let priority = parse_priority(priority)?;

        let title = title.trim();
        let mut tasks = self.repository.load();
        if is_duplicate(&tasks, title, due) {
            return Err(TaskError::DuplicateTask {
                title: title.to_string(),
                due_date: due.format(DATE_FORMAT).to_string(),
            });
        }

        let task = Task::new(title, description, due, priority);
        tasks.push(task.clone());
        self.repository.save(&tasks)?;

        Ok(task)
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// Both the shape (zero-padded four-digit year, two-digit month and day) and
/// the calendar date are checked, so `2025-7-20` and `2025-02-30` fail alike.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, TaskError> {
    let invalid = || TaskError::InvalidDateFormat(value.to_string());

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

pub fn parse_priority(value: &str) -> Result<Priority, TaskError> {
    value.parse().map_err(|_| TaskError::InvalidPriority(value.to_string()))
}

/// Whether `tasks` already holds a task with this title (ignoring case) on this due date.
pub fn is_duplicate(tasks: &[Task], title: &str, due_date: NaiveDate) -> bool {
    let title = title.trim().to_lowercase();
    let due_date = due_date.format(DATE_FORMAT).to_string();

    tasks
        .iter()
        .any(|task| task.due_date == due_date && task.title.trim().to_lowercase() == title)
}
