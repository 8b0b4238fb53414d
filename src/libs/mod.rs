//! Core library modules for the ptm application.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ptm::libs::config::Config;
//! use ptm::libs::validator::parse_due_date;
//!
//! let config = Config::read()?;
//! let due = parse_due_date("2025-07-20")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod task;
pub mod validator;
