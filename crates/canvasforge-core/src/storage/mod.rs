//! Storage abstraction for project persistence.

mod autosave;
mod file;
mod memory;

pub use autosave::{AutoSaveManager, DEFAULT_AUTOSAVE_INTERVAL_SECS, LAST_PROJECT_KEY};
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::scene::ProjectSnapshot;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Project not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async storage operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for project storage backends.
///
/// Implementations can keep projects in memory or on the filesystem;
/// the interface stays async so a remote backend fits behind it too.
pub trait Storage: Send + Sync {
    /// Save a project snapshot under a key.
    fn save(&self, key: &str, snapshot: &ProjectSnapshot) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a project snapshot.
    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<ProjectSnapshot>>;

    /// Delete a stored project.
    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all stored project keys.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if a project exists.
    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

/// Current wall-clock time as a unix-millisecond string, for the
/// `lastSaved` stamp.
pub(crate) fn timestamp_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis().to_string(),
        Err(_) => "0".to_string(),
    }
}
