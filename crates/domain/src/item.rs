//! Surplus item listing and its dietary flags.

use common::ItemId;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Dietary attributes of a single listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DietaryFlags {
    /// Suitable for vegetarians.
    pub vegetarian: bool,

    /// Suitable for vegans. Vegan food is usually also vegetarian, but that
    /// is a labelling suggestion, not an enforced invariant of the data.
    pub vegan: bool,

    /// Contains no gluten.
    pub gluten_free: bool,

    /// Prepared halal.
    pub halal: bool,
}

/// One surplus food listing offered by a venue.
///
/// Immutable once created: price must be non-negative and nothing in the
/// domain mutates a listing after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique listing identifier.
    pub id: ItemId,

    /// Human-readable name.
    pub name: String,

    /// Portions remaining.
    pub quantity: u32,

    /// Price per portion.
    pub price: Money,

    /// Dietary attributes.
    pub flags: DietaryFlags,
}

impl Item {
    /// Creates a new listing with a generated ID.
    pub fn new(name: impl Into<String>, quantity: u32, price: Money, flags: DietaryFlags) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            quantity,
            price,
            flags,
        }
    }
}
