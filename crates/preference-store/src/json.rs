//! JSON-document store, one file per profile.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use domain::Preferences;
use domain::store::{PreferenceStore, Result, StoreError};

/// Stores the preferences as one pretty-printed JSON document at a fixed
/// path. Each save replaces the whole document (write-through, no batching).
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    /// Creates a store backed by the given file path. Parent directories
    /// are created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing document.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl PreferenceStore for JsonPreferenceStore {
    async fn load(&self) -> Result<Option<Preferences>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err)),
        };
        let preferences = serde_json::from_slice(&bytes)?;
        Ok(Some(preferences))
    }

    async fn save(&self, preferences: &Preferences) -> Result<()> {
        let json = serde_json::to_vec_pretty(preferences)?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}
