//! Pure visibility rules over preferences and items.
//!
//! Every function here is deterministic and side-effect free: the same
//! preferences and item always produce the same answer.

use crate::item::Item;
use crate::preferences::{DietaryPreferences, Preferences};
use crate::venue::Venue;

/// Returns true if the item satisfies every active dietary restriction.
///
/// The four checks are independent AND conditions.
pub fn matches_dietary_preferences(dietary: &DietaryPreferences, item: &Item) -> bool {
    if dietary.vegetarian && !item.flags.vegetarian {
        return false;
    }
    if dietary.vegan && !item.flags.vegan {
        return false;
    }
    if dietary.requires_gluten_free && !item.flags.gluten_free {
        return false;
    }
    if dietary.requires_halal && !item.flags.halal {
        return false;
    }
    true
}

/// Returns true if the item's price is at or below the budget ceiling.
pub fn is_within_budget(preferences: &Preferences, item: &Item) -> bool {
    item.price <= preferences.max_price_per_item
}

/// Returns true if the item passes both the dietary and the budget filter.
pub fn matches(preferences: &Preferences, item: &Item) -> bool {
    matches_dietary_preferences(&preferences.dietary, item) && is_within_budget(preferences, item)
}

/// The venue's listings this user should see.
pub fn visible_items<'a>(preferences: &Preferences, venue: &'a Venue) -> Vec<&'a Item> {
    venue
        .items
        .iter()
        .filter(|item| matches(preferences, item))
        .collect()
}
