//! # ptm - Personal Task Manager
//!
//! A command-line utility that validates tasks and appends them to a
//! single JSON file.
//!
//! ## Features
//!
//! - **Validation Pipeline**: Required fields, strict `YYYY-MM-DD` due dates, closed priority set
//! - **Duplicate Detection**: Case-insensitive title plus due date
//! - **JSON Store**: Whole-file load and save behind a repository trait
//! - **Localized Messages**: English and Vietnamese output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ptm::db::tasks::JsonTaskRepository;
//! use ptm::libs::validator::TaskManager;
//!
//! let manager = TaskManager::new(JsonTaskRepository::new("tasks_database.json"));
//! let task = manager.add_new_task("Buy book", None, "2025-07-20", "High")?;
//! println!("{}", task.id);
//! # Ok::<(), ptm::libs::error::TaskError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
