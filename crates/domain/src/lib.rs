//! Domain layer for the Second Helping dining-surplus marketplace.
//!
//! This crate provides the core business rules:
//! - `Money` value object for dining-dollar amounts
//! - `Item` and `Venue` catalog types
//! - `Preferences` with dietary filters, budget ceiling, and balance
//! - `matching`: pure visibility rules over preferences and items
//! - `ledger`: balance mutation with overdraft protection and the
//!   reservation lifecycle
//! - `store`: the persistence port the ledger writes through

pub mod item;
pub mod ledger;
pub mod matching;
pub mod money;
pub mod preferences;
pub mod store;
pub mod venue;

pub use item::{DietaryFlags, Item};
pub use ledger::{
    LedgerError, LedgerService, PICKUP_WINDOW, PurchaseReceipt, RESERVATION_FEE, Reservation,
};
pub use money::Money;
pub use preferences::{DietaryPreferences, Preferences};
pub use store::{InMemoryPreferenceStore, PreferenceStore, StoreError};
pub use venue::{Coordinates, Venue};
