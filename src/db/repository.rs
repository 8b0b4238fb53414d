use crate::libs::error::RepositoryError;
use crate::libs::task::TaskCollection;

/// Whole-collection storage for tasks.
///
/// Implementations read everything before a mutation and write everything
/// after it; there is no incremental update.
pub trait TaskRepository {
    /// Loads the full collection. Never fails: an unusable store is treated as empty.
    fn load(&self) -> TaskCollection;

    /// Replaces the stored collection with `tasks`.
    fn save(&self, tasks: &TaskCollection) -> Result<(), RepositoryError>;
}
