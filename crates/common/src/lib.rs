//! Shared types used across the Second Helping crates.

mod types;

pub use types::{ItemId, VenueId};
