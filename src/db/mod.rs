//! Persistence layer for the ptm application.
//!
//! The store is a single JSON array file that is read in full before every
//! mutation and rewritten in full afterwards. There is no locking: two
//! processes adding tasks at the same moment can lose one of the additions.

/// Storage contract used by the task manager.
pub mod repository;

/// JSON file implementation of the storage contract.
pub mod tasks;
