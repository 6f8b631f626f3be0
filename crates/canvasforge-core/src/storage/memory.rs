//! In-memory storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::scene::ProjectSnapshot;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    projects: RwLock<HashMap<String, ProjectSnapshot>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, snapshot: &ProjectSnapshot) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        let snapshot = snapshot.clone();
        Box::pin(async move {
            let mut projects = self
                .projects
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            projects.insert(key, snapshot);
            Ok(())
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<ProjectSnapshot>> {
        let key = key.to_string();
        Box::pin(async move {
            let projects = self
                .projects
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            projects
                .get(&key)
                .cloned()
                .ok_or_else(|| StorageError::NotFound(key))
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        Box::pin(async move {
            let mut projects = self
                .projects
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            projects.remove(&key);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let projects = self
                .projects
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            Ok(projects.keys().cloned().collect())
        })
    }

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let key = key.to_string();
        Box::pin(async move {
            let projects = self
                .projects
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            Ok(projects.contains_key(&key))
        })
    }
}
