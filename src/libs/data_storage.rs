use std::env;
use std::path::PathBuf;

/// Resolves application files relative to a base directory.
///
/// The default base is the process working directory, which is where the
/// task store and the optional configuration file live.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self { base_path }
    }

    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Joins `file_name` onto the base directory. Absolute names are returned unchanged.
    pub fn get_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
