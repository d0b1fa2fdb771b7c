//! Preference tracker.

use tracing::instrument;

use chatclothes_core::{Phone, Preference};

use crate::db::{PreferenceRepository, PreferenceUpdate, RepositoryError, Store};

/// Records what customers search for, add to their cart and buy.
pub struct PreferenceTracker<'a> {
    preferences: PreferenceRepository<'a>,
}

impl<'a> PreferenceTracker<'a> {
    /// Create a new preference tracker.
    #[must_use]
    pub fn new(store: &'a Store) -> Self {
        Self {
            preferences: store.preferences(),
        }
    }

    /// Append the given values to the customer's record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the preferences table cannot be updated.
    #[instrument(skip(self, update), fields(identity = %identity))]
    pub fn record(
        &self,
        identity: &Phone,
        update: PreferenceUpdate<'_>,
    ) -> Result<Preference, RepositoryError> {
        self.preferences.append(identity, update)
    }

    /// Record one searched word.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the preferences table cannot be updated.
    pub fn record_characteristic(
        &self,
        identity: &Phone,
        characteristic: &str,
    ) -> Result<Preference, RepositoryError> {
        self.record(
            identity,
            PreferenceUpdate {
                characteristic: Some(characteristic),
                ..PreferenceUpdate::default()
            },
        )
    }

    /// Record an item put in the cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the preferences table cannot be updated.
    pub fn add_to_cart(&self, identity: &Phone, item: &str) -> Result<Preference, RepositoryError> {
        self.record(
            identity,
            PreferenceUpdate {
                cart_item: Some(item),
                ..PreferenceUpdate::default()
            },
        )
    }

    /// Record a purchase.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the preferences table cannot be updated.
    pub fn record_purchase(
        &self,
        identity: &Phone,
        item: &str,
    ) -> Result<Preference, RepositoryError> {
        self.record(
            identity,
            PreferenceUpdate {
                purchase: Some(item),
                ..PreferenceUpdate::default()
            },
        )
    }

    /// The customer's `n` most frequent characteristics. Empty for an unknown
    /// customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the preferences table cannot be read.
    pub fn top_characteristics(
        &self,
        identity: &Phone,
        n: usize,
    ) -> Result<Vec<String>, RepositoryError> {
        Ok(self
            .preferences
            .get(identity)?
            .map(|pref| pref.top_characteristics(n))
            .unwrap_or_default())
    }

    /// The stored record, if the customer has one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the preferences table cannot be read.
    pub fn get(&self, identity: &Phone) -> Result<Option<Preference>, RepositoryError> {
        self.preferences.get(identity)
    }
}
