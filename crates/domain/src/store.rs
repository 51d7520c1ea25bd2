//! Persistence port for user preferences.
//!
//! The ledger writes through this trait after every mutation. Implementations
//! live wherever the backend lives: an in-memory store here for tests and
//! composition, a JSON-file store in the `preference-store` crate.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use crate::preferences::Preferences;

/// Errors that can occur when loading or saving preferences.
///
/// Never fatal: the ledger recovers a failed load by falling back to the
/// default profile and logs a failed save without aborting the mutation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be read or written.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Write-through storage for the user's preferences.
///
/// `load` returns `Ok(None)` when nothing has been saved yet; a malformed
/// document surfaces as `Serialization`.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Loads the persisted preferences, if any.
    async fn load(&self) -> Result<Option<Preferences>>;

    /// Persists the preferences, replacing any previous document.
    async fn save(&self, preferences: &Preferences) -> Result<()>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    preferences: Option<Preferences>,
    save_count: u64,
    fail_on_save: bool,
    fail_on_load: bool,
}

/// In-memory preference store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryPreferenceStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given preferences.
    pub fn with_preferences(preferences: Preferences) -> Self {
        let store = Self::new();
        store.state.write().unwrap().preferences = Some(preferences);
        store
    }

    /// Configures the store to fail on save calls.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.state.write().unwrap().fail_on_save = fail;
    }

    /// Configures the store to fail on load calls.
    pub fn set_fail_on_load(&self, fail: bool) {
        self.state.write().unwrap().fail_on_load = fail;
    }

    /// Returns the number of successful saves.
    pub fn save_count(&self) -> u64 {
        self.state.read().unwrap().save_count
    }

    /// Returns the currently persisted preferences, if any.
    pub fn persisted(&self) -> Option<Preferences> {
        self.state.read().unwrap().preferences.clone()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn load(&self) -> Result<Option<Preferences>> {
        let state = self.state.read().unwrap();
        if state.fail_on_load {
            return Err(StoreError::Io(std::io::Error::other("load failure")));
        }
        Ok(state.preferences.clone())
    }

    async fn save(&self, preferences: &Preferences) -> Result<()> {
        let mut state = self.state.write().unwrap();
        if state.fail_on_save {
            return Err(StoreError::Io(std::io::Error::other("save failure")));
        }
        state.preferences = Some(preferences.clone());
        state.save_count += 1;
        Ok(())
    }
}
