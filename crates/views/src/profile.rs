//! Profile summary for the account screen.

use domain::Preferences;
use serde::Serialize;

/// Formatted profile data: identity, balance, filters, favorites.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub balance: String,
    pub max_price_per_item: String,
    pub restrictions: Vec<&'static str>,
    pub favorites: Vec<String>,
}

/// Builds the profile summary.
pub fn profile_view(preferences: &Preferences) -> ProfileView {
    ProfileView {
        name: preferences.name.clone(),
        email: preferences.email.clone(),
        balance: preferences.balance().to_string(),
        max_price_per_item: preferences.max_price_per_item.to_string(),
        restrictions: preferences.active_restrictions(),
        favorites: preferences.favorite_venues().map(str::to_string).collect(),
    }
}
