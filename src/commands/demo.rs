//! Replays the sample additions used to exercise the task store by hand.

use crate::{
    db::{repository::TaskRepository, tasks::JsonTaskRepository},
    libs::{
        config::Config,
        data_storage::DataStorage,
        error::TaskError,
        messages::Message,
        task::Task,
        validator::TaskManager,
    },
    msg_debug,
};
use anyhow::Result;

/// (title, description, due date, priority). The last one has no title and is rejected.
pub const SAMPLE_TASKS: [(&str, &str, &str, &str); 3] = [
    ("Buy book", "Software engineering book", "2025-07-20", "High"),
    ("Exercise", "Run for 30 minutes", "2025-07-21", "Medium"),
    ("", "Task without a title", "2025-07-22", "Low"),
];

pub fn cmd(config: &Config) -> Result<()> {
    let repository = JsonTaskRepository::from_config(config, &DataStorage::new());
    add_samples(&TaskManager::new(repository));

    Ok(())
}

/// Adds each of [`SAMPLE_TASKS`] in order and returns the outcome of every attempt.
pub fn add_samples<R: TaskRepository>(manager: &TaskManager<R>) -> Vec<Result<Task, TaskError>> {
    SAMPLE_TASKS
        .into_iter()
        .map(|(title, description, due, priority)| {
            let added = manager.add_new_task(title, Some(description), due, priority);
            if added.is_err() {
                msg_debug!(Message::DemoTaskSkipped(title.to_string()));
            }
            added
        })
        .collect()
}
