//! A single active claim on a venue's surplus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::venue::Venue;

use super::PICKUP_WINDOW;

/// A claim on a venue's surprise bag, created for a flat fee.
///
/// At most one reservation is live at a time; the ledger replaces any prior
/// one when a new reservation succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Snapshot of the venue at reservation time.
    pub venue: Venue,

    /// Pickup window label shown to the user.
    pub pickup_window: String,

    /// When the reservation was made.
    pub reserved_at: DateTime<Utc>,
}

impl Reservation {
    pub(crate) fn new(venue: Venue) -> Self {
        Self {
            venue,
            pickup_window: PICKUP_WINDOW.to_string(),
            reserved_at: Utc::now(),
        }
    }
}
