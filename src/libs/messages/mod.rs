pub mod display;
pub mod macros;
pub mod types;

pub use types::{Language, Message};

use std::fmt::Display;
use std::sync::OnceLock;

static LANGUAGE: OnceLock<Language> = OnceLock::new();

/// Selects the message language for the rest of the process.
///
/// Only the first call has an effect; later calls are ignored.
pub fn set_language(language: Language) {
    let _ = LANGUAGE.set(language);
}

pub fn language() -> Language {
    LANGUAGE.get().copied().unwrap_or_default()
}

/// Formats a failure line the way the task manager prints it.
pub fn error(msg: impl Display) -> String {
    format!("❌ {}", msg)
}
