//! Venue cards with their visible listings.

use common::VenueId;
use domain::{Coordinates, Item, Preferences, Venue, matching};
use serde::Serialize;

/// One listing row, already filtered and formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub tags: Vec<&'static str>,
}

/// A venue card: only the listings this user should see.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueView {
    pub id: VenueId,
    pub name: String,
    pub description: String,
    pub coordinates: Coordinates,
    pub image_name: String,
    pub favorite: bool,
    pub items: Vec<ItemView>,
}

fn item_view(item: &Item) -> ItemView {
    let mut tags = Vec::new();
    if item.flags.vegetarian {
        tags.push("Veg");
    }
    if item.flags.vegan {
        tags.push("Vegan");
    }
    if item.flags.gluten_free {
        tags.push("GF");
    }
    if item.flags.halal {
        tags.push("Halal");
    }

    ItemView {
        name: item.name.clone(),
        quantity: item.quantity,
        price: item.price.to_string(),
        tags,
    }
}

/// Builds the card for one venue, filtering listings through the match
/// engine (dietary and budget rules).
pub fn venue_view(preferences: &Preferences, venue: &Venue) -> VenueView {
    let items = matching::visible_items(preferences, venue)
        .into_iter()
        .map(item_view)
        .collect();

    VenueView {
        id: venue.id,
        name: venue.name.clone(),
        description: venue.description.clone(),
        coordinates: venue.coordinates,
        image_name: venue.image_name.clone(),
        favorite: preferences.is_favorite(&venue.name),
        items,
    }
}

/// Builds cards for every venue, preserving catalog order.
pub fn venue_views(preferences: &Preferences, venues: &[Venue]) -> Vec<VenueView> {
    venues
        .iter()
        .map(|venue| venue_view(preferences, venue))
        .collect()
}
