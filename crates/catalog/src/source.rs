//! Catalog trait and in-memory implementation.

use async_trait::async_trait;
use domain::Venue;
use thiserror::Error;

/// Errors a catalog collaborator can surface.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog backend could not be reached. The in-memory catalog
    /// never returns this; remote implementations use it for transport
    /// failures.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the list of venues. Read-only from the core's point of view.
#[async_trait]
pub trait VenueCatalog: Send + Sync {
    /// Returns every venue currently offering surplus.
    async fn venues(&self) -> Result<Vec<Venue>, CatalogError>;
}

/// Catalog over a fixed list of venues.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVenueCatalog {
    venues: Vec<Venue>,
}

impl InMemoryVenueCatalog {
    /// Creates a catalog over the given venues.
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// Creates a catalog over the bundled sample venues.
    pub fn with_sample_data() -> Self {
        Self::new(crate::sample::venues())
    }
}

#[async_trait]
impl VenueCatalog for InMemoryVenueCatalog {
    async fn venues(&self) -> Result<Vec<Venue>, CatalogError> {
        Ok(self.venues.clone())
    }
}
