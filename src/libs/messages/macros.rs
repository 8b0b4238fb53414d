//! Convenient macros for application messaging and logging.
//!
//! The macros switch between structured logging and plain console output.
//! In debug mode every message goes through `tracing`; otherwise it is
//! printed with `println!`/`eprintln!`.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either of these environment variables is set:
//! - **`PTM_DEBUG`**: Explicit debug mode enablement
//! - **`RUST_LOG`**: Standard Rust logging configuration
//!
//! ## Output Streams
//!
//! | Macro          | Prefix | Normal mode | Debug mode         |
//! |----------------|--------|-------------|--------------------|
//! | `msg_print!`   |        | stdout      | `tracing::info!`   |
//! | `msg_success!` | ✅     | stdout      | `tracing::info!`   |
//! | `msg_error!`   | ❌     | stderr      | `tracing::error!`  |
//! | `msg_warning!` | ⚠️     | stderr      | `tracing::warn!`   |
//! | `msg_debug!`   | 🔍     | (nothing)   | `tracing::debug!`  |
//!
//! ## Usage Examples
//!
//! ```rust
//! use ptm::{msg_error, msg_success};
//! use ptm::libs::messages::Message;
//!
//! msg_success!(Message::TaskAdded("0b5f3c1e".to_string()));
//! msg_error!(Message::StoreNotAnArray("tasks_database.json".to_string()));
//! ```

use std::sync::OnceLock;

/// Cached result of debug mode detection.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// The environment is inspected on the first call only.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("PTM_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message with automatic debug mode routing.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix and automatic routing.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix and automatic routing.
///
/// In normal mode the message is written to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
///
/// Warnings report degraded behavior, such as an unreadable task store being
/// treated as empty, and go to stderr in normal mode.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            eprintln!("⚠️ {}", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// Nothing is printed unless debug mode is enabled.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
