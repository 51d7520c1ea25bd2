//! Ledger service: the one place that moves dining dollars.

use crate::money::Money;
use crate::preferences::Preferences;
use crate::store::PreferenceStore;
use crate::venue::Venue;

use super::{LedgerError, RESERVATION_FEE, Reservation};

/// Outcome of a successful purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseReceipt {
    /// What was bought.
    pub item_name: String,

    /// What was paid.
    pub price: Money,

    /// Balance after the debit.
    pub new_balance: Money,
}

/// Owns the live [`Preferences`], the active reservation slot, and the
/// store collaborator.
///
/// All mutating operations take `&mut self`, so check-then-debit is atomic
/// by construction: a caller that needs concurrent access puts the service
/// behind its own lock. Preferences are written through to the store after
/// every mutation; a failed save is logged and never aborts the mutation.
pub struct LedgerService<S> {
    store: S,
    preferences: Preferences,
    reservation: Option<Reservation>,
}

impl<S: PreferenceStore> LedgerService<S> {
    /// Loads the persisted profile through the store.
    ///
    /// Absent or malformed data falls back to the default profile; the
    /// failure is logged and not propagated.
    pub async fn load(store: S) -> Self {
        let preferences = load_or_default(&store).await;
        Self {
            store,
            preferences,
            reservation: None,
        }
    }

    /// Creates a service over an explicit profile, persisting it immediately.
    pub async fn with_preferences(store: S, mut preferences: Preferences) -> Self {
        preferences.normalize();
        let mut service = Self {
            store,
            preferences,
            reservation: None,
        };
        service.persist().await;
        service
    }

    /// The current profile.
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// The active reservation, if any.
    pub fn active_reservation(&self) -> Option<&Reservation> {
        self.reservation.as_ref()
    }

    /// Returns true if the balance covers `price`.
    pub fn can_afford(&self, price: Money) -> bool {
        self.preferences.can_afford(price)
    }

    /// Returns true if the named venue is a favorite.
    pub fn is_favorite(&self, venue_name: &str) -> bool {
        self.preferences.is_favorite(venue_name)
    }

    /// Buys one item, debiting its price.
    ///
    /// Declines with [`LedgerError::InsufficientBalance`] without mutating
    /// any state; on success the new balance is on the receipt.
    #[tracing::instrument(skip(self))]
    pub async fn purchase_item(
        &mut self,
        price: Money,
        item_name: &str,
    ) -> Result<PurchaseReceipt, LedgerError> {
        let new_balance = match self.preferences.debit(price) {
            Ok(balance) => balance,
            Err(err) => {
                metrics::counter!("ledger_purchases_declined_total").increment(1);
                return Err(err);
            }
        };
        self.persist().await;
        metrics::counter!("ledger_purchases_total").increment(1);
        tracing::debug!(%price, %new_balance, item_name, "purchase completed");

        Ok(PurchaseReceipt {
            item_name: item_name.to_string(),
            price,
            new_balance,
        })
    }

    /// Reserves a surprise bag at `venue` for the flat [`RESERVATION_FEE`].
    ///
    /// An insufficient balance fails without mutation. Success debits the
    /// fee and installs the new reservation, replacing any prior one; the
    /// replaced reservation's fee is not refunded.
    #[tracing::instrument(skip(self, venue), fields(venue = %venue.name))]
    pub async fn reserve(&mut self, venue: &Venue) -> Result<Reservation, LedgerError> {
        if let Err(err) = self.preferences.debit(RESERVATION_FEE) {
            metrics::counter!("ledger_reservations_declined_total").increment(1);
            return Err(err);
        }
        let reservation = Reservation::new(venue.clone());
        self.reservation = Some(reservation.clone());
        self.persist().await;
        metrics::counter!("ledger_reservations_total").increment(1);
        tracing::debug!(new_balance = %self.preferences.balance(), "reservation placed");

        Ok(reservation)
    }

    /// Clears the active reservation and returns it.
    ///
    /// The fee already debited is forfeited, not refunded.
    pub fn cancel_reservation(&mut self) -> Option<Reservation> {
        self.reservation.take()
    }

    /// Credits the balance and returns the new amount.
    ///
    /// The amount is assumed positive; no clamping is applied.
    #[tracing::instrument(skip(self))]
    pub async fn add_funds(&mut self, amount: Money) -> Money {
        let new_balance = self.preferences.credit(amount);
        self.persist().await;
        new_balance
    }

    /// Replaces the editable profile wholesale, normalizing the dietary
    /// coupling, and persists. This is the edit-form save path.
    #[tracing::instrument(skip(self, preferences))]
    pub async fn update_preferences(&mut self, mut preferences: Preferences) {
        preferences.normalize();
        self.preferences = preferences;
        self.persist().await;
    }

    /// Toggles the named venue in the favorites set and persists. Returns
    /// true if the venue is a favorite after the toggle.
    pub async fn toggle_favorite(&mut self, venue_name: &str) -> bool {
        let favorite = self.preferences.toggle_favorite(venue_name);
        self.persist().await;
        favorite
    }

    /// Replaces the profile with the default set and persists.
    #[tracing::instrument(skip(self))]
    pub async fn reset_to_defaults(&mut self) {
        self.preferences = Preferences::default();
        self.persist().await;
    }

    /// Re-reads the profile from the store, with the same fallback
    /// semantics as [`LedgerService::load`].
    pub async fn reload(&mut self) {
        self.preferences = load_or_default(&self.store).await;
    }

    async fn persist(&self) {
        if let Err(err) = self.store.save(&self.preferences).await {
            tracing::warn!(error = %err, "failed to persist preferences");
        }
    }
}

async fn load_or_default<S: PreferenceStore>(store: &S) -> Preferences {
    match store.load().await {
        Ok(Some(mut preferences)) => {
            preferences.normalize();
            preferences
        }
        Ok(None) => Preferences::default(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to load preferences, using defaults");
            Preferences::default()
        }
    }
}
