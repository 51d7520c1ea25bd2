//! File-backed [`PreferenceStore`] implementation.
//!
//! Persists the user's preferences as a single JSON document, the durable
//! counterpart of the in-memory store that ships with the domain crate.

mod json;

pub use json::JsonPreferenceStore;
