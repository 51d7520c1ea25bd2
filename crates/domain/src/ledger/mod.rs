//! Balance-mutating operations with overdraft protection.
//!
//! Every debit in the system routes through [`LedgerService`]: item
//! purchases and the flat reservation fee both check affordability before
//! touching the balance, and a declined operation leaves the profile
//! byte-for-byte unchanged.

mod reservation;
mod service;

pub use reservation::Reservation;
pub use service::{LedgerService, PurchaseReceipt};

use thiserror::Error;

use crate::money::Money;

/// Flat fee charged for reserving a surprise bag, independent of item prices.
pub const RESERVATION_FEE: Money = Money::from_cents(1000);

/// Pickup window printed on every reservation.
pub const PICKUP_WINDOW: &str = "Tonight, 7:45 PM - 8:30 PM";

/// Errors returned by ledger operations.
///
/// All of these are recoverable result values, never fatal conditions.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The balance does not cover the requested debit. Carries the current
    /// balance so callers can surface it without another lookup.
    #[error("insufficient balance: {required} needed but only {balance} available")]
    InsufficientBalance { required: Money, balance: Money },
}
