//! Venue: a dining location offering surplus items.

use common::VenueId;
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Geographic position of a venue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A dining location with its current list of surplus listings.
///
/// Immutable: the catalog collaborator supplies venues as read-only input
/// and nothing in the domain mutates them. Listing order is irrelevant for
/// matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique venue identifier.
    pub id: VenueId,

    /// Display name. Favorites reference venues by this name.
    pub name: String,

    /// Short description shown on the venue card.
    pub description: String,

    /// Location on the campus map.
    pub coordinates: Coordinates,

    /// Surplus listings currently offered.
    pub items: Vec<Item>,

    /// Asset name for the venue's hero image, a presentation hint.
    pub image_name: String,
}

impl Venue {
    /// Creates a new venue with a generated ID.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        coordinates: Coordinates,
        items: Vec<Item>,
        image_name: impl Into<String>,
    ) -> Self {
        Self {
            id: VenueId::new(),
            name: name.into(),
            description: description.into(),
            coordinates,
            items,
            image_name: image_name.into(),
        }
    }
}
