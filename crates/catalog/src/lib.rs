//! Venue catalog collaborator.
//!
//! The core treats the venue list as read-only input. This crate provides
//! the collaborator trait, an in-memory implementation, and the bundled
//! sample catalog.

pub mod sample;

mod source;

pub use source::{CatalogError, InMemoryVenueCatalog, VenueCatalog};
