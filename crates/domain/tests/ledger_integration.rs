//! Integration tests for the ledger and preference flow.
//!
//! These tests drive the service the way the app does: load a profile
//! through a store, spend and reserve against it, and confirm the
//! write-through persistence another session would observe.

use domain::{
    Coordinates, InMemoryPreferenceStore, LedgerError, LedgerService, Money, Preferences,
    RESERVATION_FEE, Venue,
};

fn hall(name: &str) -> Venue {
    Venue::new(
        name,
        "A dining hall",
        Coordinates {
            latitude: 39.952284,
            longitude: -75.195497,
        },
        vec![],
        "hall",
    )
}

mod reservation_flow {
    use super::*;

    #[tokio::test]
    async fn reserve_replace_and_cancel() {
        let store = InMemoryPreferenceStore::new();
        let mut service = LedgerService::load(store.clone()).await;
        assert_eq!(service.preferences().balance(), Money::from_dollars(100));
        assert_eq!(RESERVATION_FEE, Money::from_dollars(10));

        // First reservation debits the flat fee.
        service.reserve(&hall("Hill House")).await.unwrap();
        assert_eq!(service.preferences().balance(), Money::from_dollars(90));
        assert!(service.active_reservation().is_some());

        // A second reservation debits again and keeps only the newest.
        service.reserve(&hall("1920 Commons")).await.unwrap();
        assert_eq!(service.preferences().balance(), Money::from_dollars(80));
        assert_eq!(
            service.active_reservation().unwrap().venue.name,
            "1920 Commons"
        );

        // Cancellation clears the slot but forfeits the fee.
        service.cancel_reservation();
        assert!(service.active_reservation().is_none());
        assert_eq!(service.preferences().balance(), Money::from_dollars(80));
    }

    #[tokio::test]
    async fn repeated_underfunded_reserves_change_nothing() {
        let store = InMemoryPreferenceStore::new();
        let mut service = LedgerService::load(store.clone()).await;

        // Spend down to $4.00, below the fee.
        service
            .purchase_item(Money::from_cents(9600), "Meal Plan Upgrade")
            .await
            .unwrap();
        let saves_before = store.save_count();

        for _ in 0..5 {
            assert!(service.reserve(&hall("Hill House")).await.is_err());
        }

        assert_eq!(service.preferences().balance(), Money::from_cents(400));
        assert!(service.active_reservation().is_none());
        assert_eq!(store.save_count(), saves_before);
    }

    #[tokio::test]
    async fn cancel_then_reserve_again() {
        let mut service = LedgerService::load(InMemoryPreferenceStore::new()).await;

        service.reserve(&hall("Hill House")).await.unwrap();
        service.cancel_reservation();

        // No residual state blocks a fresh reservation.
        let reservation = service.reserve(&hall("English House")).await.unwrap();
        assert_eq!(reservation.venue.name, "English House");
    }
}

mod purchase_flow {
    use super::*;

    #[tokio::test]
    async fn declined_purchase_reports_the_balance() {
        let store = InMemoryPreferenceStore::new();
        let mut service = LedgerService::load(store.clone()).await;

        // Spend down to $5.00.
        service
            .purchase_item(Money::from_cents(9500), "Semester Snacks")
            .await
            .unwrap();

        let err = service
            .purchase_item(Money::from_cents(600), "Grain Bowl")
            .await
            .unwrap_err();

        match err {
            LedgerError::InsufficientBalance { required, balance } => {
                assert_eq!(required, Money::from_cents(600));
                assert_eq!(balance, Money::from_cents(500));
            }
        }
        assert!(err.to_string().contains("insufficient"));
        assert_eq!(service.preferences().balance(), Money::from_cents(500));
    }

    #[tokio::test]
    async fn purchases_and_reservations_share_one_balance() {
        let mut service = LedgerService::load(InMemoryPreferenceStore::new()).await;

        service
            .purchase_item(Money::from_cents(4500), "Stir-Fry Bar")
            .await
            .unwrap();
        service.reserve(&hall("Lauder College House")).await.unwrap();
        let receipt = service
            .purchase_item(Money::from_cents(2500), "Tandoori Chicken")
            .await
            .unwrap();

        // 100.00 - 45.00 - 10.00 - 25.00
        assert_eq!(receipt.new_balance, Money::from_cents(2000));
    }

    #[tokio::test]
    async fn exact_balance_purchase_succeeds() {
        let mut service = LedgerService::load(InMemoryPreferenceStore::new()).await;

        let receipt = service
            .purchase_item(Money::from_dollars(100), "Catering Order")
            .await
            .unwrap();

        assert_eq!(receipt.new_balance, Money::zero());
        assert!(service.preferences().balance().is_zero());
    }
}

mod persistence {
    use super::*;

    #[tokio::test]
    async fn a_second_session_sees_the_debits() {
        let store = InMemoryPreferenceStore::new();

        let mut first = LedgerService::load(store.clone()).await;
        first.reserve(&hall("Hill House")).await.unwrap();
        first
            .purchase_item(Money::from_cents(350), "Late Night Pizza Slices")
            .await
            .unwrap();
        drop(first);

        let second = LedgerService::load(store).await;
        assert_eq!(second.preferences().balance(), Money::from_cents(8650));
        // The reservation itself is session state, not persisted.
        assert!(second.active_reservation().is_none());
    }

    #[tokio::test]
    async fn broken_store_still_yields_a_usable_session() {
        let store = InMemoryPreferenceStore::new();
        store.set_fail_on_load(true);
        store.set_fail_on_save(true);

        let mut service = LedgerService::load(store).await;
        assert_eq!(service.preferences(), &Preferences::default());

        // Mutations still apply in memory; failed saves are logged only.
        service
            .purchase_item(Money::from_cents(100), "Bagel")
            .await
            .unwrap();
        assert_eq!(service.preferences().balance(), Money::from_cents(9900));
    }
}

mod preference_edits {
    use super::*;

    #[tokio::test]
    async fn edit_form_roundtrip_normalizes_dietary_flags() {
        let store = InMemoryPreferenceStore::new();
        let mut service = LedgerService::load(store.clone()).await;

        // Clone, edit, save back: the form workflow.
        let mut edited = service.preferences().clone();
        edited.name = "Robin".to_string();
        edited.email = "robin@upenn.edu".to_string();
        edited.dietary.vegan = true; // form forgot to tick vegetarian
        edited.max_price_per_item = Money::from_cents(750);
        service.update_preferences(edited).await;

        let saved = store.persisted().unwrap();
        assert_eq!(saved.name, "Robin");
        assert!(saved.dietary.vegetarian);
        assert_eq!(saved.max_price_per_item, Money::from_cents(750));
        // Editing never touches the balance.
        assert_eq!(saved.balance(), Money::from_dollars(100));
    }

    #[tokio::test]
    async fn favorite_toggles_survive_reload() {
        let store = InMemoryPreferenceStore::new();
        let mut service = LedgerService::load(store.clone()).await;

        service.toggle_favorite("Falk Kosher Dining").await;
        service.reload().await;

        assert!(service.is_favorite("Falk Kosher Dining"));
    }

    #[tokio::test]
    async fn reset_restores_the_default_profile() {
        let store = InMemoryPreferenceStore::new();
        let mut service = LedgerService::load(store.clone()).await;

        service.add_funds(Money::from_dollars(400)).await;
        service.toggle_favorite("Hill House").await;
        service.reset_to_defaults().await;

        assert_eq!(service.preferences(), &Preferences::default());
        assert_eq!(store.persisted().unwrap(), Preferences::default());
    }
}
