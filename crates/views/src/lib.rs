//! View models handed to the presentation layer.
//!
//! The domain core produces raw numbers and booleans; this crate is the
//! boundary where currency becomes a two-decimal string and dietary flags
//! become tag labels. Builders are pure functions over `Preferences` and
//! venue data.

mod profile;
mod venue;

pub use profile::{ProfileView, profile_view};
pub use venue::{ItemView, VenueView, venue_view, venue_views};
