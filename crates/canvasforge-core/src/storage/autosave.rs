//! Auto-save functionality for project persistence.
//!
//! Provides automatic periodic saving of the working project to prevent
//! data loss.

use crate::scene::ProjectSnapshot;
use crate::storage::{Storage, StorageResult, timestamp_now};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default auto-save interval in seconds.
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// Key for the "last opened" project.
pub const LAST_PROJECT_KEY: &str = "__last_project__";

/// Manages automatic project persistence.
///
/// Stamps `lastSaved` on the snapshot it writes; the scene itself never
/// carries a save time.
pub struct AutoSaveManager<S: Storage> {
    /// Storage backend.
    storage: Arc<S>,
    /// Auto-save interval.
    interval: Duration,
    /// Last save timestamp.
    last_save: Option<Instant>,
    /// Whether the project has unsaved changes.
    dirty: bool,
    /// Current project key being edited.
    current_key: Option<String>,
}

impl<S: Storage> AutoSaveManager<S> {
    /// Create a new auto-save manager with the given storage backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            interval: Duration::from_secs(DEFAULT_AUTOSAVE_INTERVAL_SECS),
            last_save: None,
            dirty: false,
            current_key: None,
        }
    }

    /// Set the auto-save interval.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Get the auto-save interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Mark the project as having unsaved changes.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if the project has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set the current project key.
    pub fn set_project_key(&mut self, key: Option<String>) {
        self.current_key = key;
    }

    /// Get the current project key.
    pub fn project_key(&self) -> Option<&str> {
        self.current_key.as_deref()
    }

    /// Check if enough time has passed for an auto-save.
    pub fn should_save(&self) -> bool {
        if !self.dirty {
            return false;
        }

        match self.last_save {
            Some(last) => last.elapsed() >= self.interval,
            None => true, // Never saved, should save
        }
    }

    /// Save the project if needed (dirty + interval elapsed).
    /// Returns true if a save was performed.
    pub async fn maybe_save(&mut self, snapshot: &ProjectSnapshot) -> StorageResult<bool> {
        if !self.should_save() {
            return Ok(false);
        }

        self.save(snapshot).await?;
        Ok(true)
    }

    /// Force save the project immediately, stamping `lastSaved`.
    pub async fn save(&mut self, snapshot: &ProjectSnapshot) -> StorageResult<()> {
        let key = self
            .current_key
            .clone()
            .unwrap_or_else(|| snapshot.project_name.clone());

        let mut stamped = snapshot.clone();
        stamped.last_saved = Some(timestamp_now());
        log::debug!("saving project {:?}", key);

        self.storage.save(&key, &stamped).await?;

        // Also save as the "last project" for auto-restore
        self.storage.save(LAST_PROJECT_KEY, &stamped).await?;

        self.last_save = Some(Instant::now());
        self.dirty = false;

        Ok(())
    }

    /// Load a project by key.
    pub async fn load(&mut self, key: &str) -> StorageResult<ProjectSnapshot> {
        let snapshot = self.storage.load(key).await?;
        self.current_key = Some(key.to_string());
        self.dirty = false;
        self.last_save = Some(Instant::now());
        Ok(snapshot)
    }

    /// Try to load the last opened project.
    /// Returns None if no last project exists.
    pub async fn load_last(&mut self) -> Option<ProjectSnapshot> {
        match self.storage.load(LAST_PROJECT_KEY).await {
            Ok(snapshot) => {
                self.current_key = Some(snapshot.project_name.clone());
                self.dirty = false;
                self.last_save = Some(Instant::now());
                Some(snapshot)
            }
            Err(_) => None,
        }
    }

    /// Delete a project by key.
    pub async fn delete(&self, key: &str) -> StorageResult<()> {
        self.storage.delete(key).await
    }

    /// List all saved project keys.
    pub async fn list_projects(&self) -> StorageResult<Vec<String>> {
        let mut keys = self.storage.list().await?;
        // Filter out the special "last project" key
        keys.retain(|key| key != LAST_PROJECT_KEY);
        Ok(keys)
    }

    /// Check if a project exists.
    pub async fn exists(&self, key: &str) -> StorageResult<bool> {
        self.storage.exists(key).await
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}
