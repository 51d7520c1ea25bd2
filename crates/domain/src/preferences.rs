//! Persisted user profile: identity, dietary filters, budget, balance, favorites.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ledger::LedgerError;
use crate::money::Money;

/// Dietary filters a user has switched on.
///
/// Each flag is an independent restriction: an item must satisfy every
/// active flag to be shown (conjunctive filter, no OR relaxation).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryPreferences {
    pub vegetarian: bool,
    pub vegan: bool,
    pub requires_gluten_free: bool,
    pub requires_halal: bool,
}

impl DietaryPreferences {
    /// Enforces the vegan/vegetarian coupling: vegan implies vegetarian.
    pub fn normalize(&mut self) {
        if self.vegan {
            self.vegetarian = true;
        }
    }

    /// Returns self with the coupling enforced.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Switches the vegan filter. Enabling vegan also enables vegetarian.
    pub fn set_vegan(&mut self, vegan: bool) {
        self.vegan = vegan;
        if vegan {
            self.vegetarian = true;
        }
    }

    /// Switches the vegetarian filter. Disabling vegetarian also disables
    /// vegan, since a vegan-only profile makes no sense.
    pub fn set_vegetarian(&mut self, vegetarian: bool) {
        self.vegetarian = vegetarian;
        if !vegetarian {
            self.vegan = false;
        }
    }

    /// Labels of the active restrictions, for display and prompt assembly.
    pub fn active_restrictions(&self) -> Vec<&'static str> {
        let mut restrictions = Vec::new();
        if self.vegetarian {
            restrictions.push("Vegetarian");
        }
        if self.vegan {
            restrictions.push("Vegan");
        }
        if self.requires_gluten_free {
            restrictions.push("Gluten-Free");
        }
        if self.requires_halal {
            restrictions.push("Halal");
        }
        restrictions
    }
}

/// A user's persisted profile.
///
/// The balance is private: only the ledger paths in this crate may debit or
/// credit it, so an overdraft cannot be introduced from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Dining-dollar balance. Never negative.
    balance: Money,

    /// Active dietary filters.
    pub dietary: DietaryPreferences,

    /// Budget ceiling: only items at or below this price are shown.
    pub max_price_per_item: Money,

    /// Favorite venues, referenced by display name.
    favorite_venues: BTreeSet<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            name: "Penn Student".to_string(),
            email: "student@upenn.edu".to_string(),
            balance: Money::from_dollars(100),
            dietary: DietaryPreferences::default(),
            max_price_per_item: Money::from_dollars(10),
            favorite_venues: BTreeSet::new(),
        }
    }
}

impl Preferences {
    /// Current dining-dollar balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Returns true if the balance covers `price`.
    pub fn can_afford(&self, price: Money) -> bool {
        self.balance >= price
    }

    /// Labels of the active dietary restrictions.
    pub fn active_restrictions(&self) -> Vec<&'static str> {
        self.dietary.active_restrictions()
    }

    /// Enforces the vegan/vegetarian coupling on a loaded or edited profile.
    pub fn normalize(&mut self) {
        self.dietary.normalize();
    }

    /// Favorite venue names, in lexicographic order.
    pub fn favorite_venues(&self) -> impl Iterator<Item = &str> {
        self.favorite_venues.iter().map(String::as_str)
    }

    /// Returns true if the named venue is a favorite.
    pub fn is_favorite(&self, venue_name: &str) -> bool {
        self.favorite_venues.contains(venue_name)
    }

    /// Adds the name if absent, removes it if present. Returns true if the
    /// venue is a favorite after the toggle.
    pub fn toggle_favorite(&mut self, venue_name: &str) -> bool {
        if self.favorite_venues.remove(venue_name) {
            false
        } else {
            self.favorite_venues.insert(venue_name.to_string());
            true
        }
    }

    /// Debits the balance, all-or-nothing.
    ///
    /// Returns the new balance, or `InsufficientBalance` without touching
    /// any state. Crate-private so every debit routes through the ledger.
    pub(crate) fn debit(&mut self, amount: Money) -> Result<Money, LedgerError> {
        if !self.can_afford(amount) {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Credits the balance unconditionally and returns the new balance.
    pub(crate) fn credit(&mut self, amount: Money) -> Money {
        self.balance += amount;
        self.balance
    }
}
