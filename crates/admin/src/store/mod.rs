//! The in-memory store backing the admin panel.
//!
//! A single [`Store`] owns every collection for the process lifetime. There
//! is no persistence, no transaction boundary, and no change notification:
//! each operation takes the lock once, performs one merge or append, and
//! returns. Route handlers go through this module instead of touching the
//! collections directly.
//!
//! The store is constructed by [`crate::state::AppState`] and injected into
//! handlers, so tests get an isolated instance per case rather than sharing
//! a process-wide singleton.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use thiserror::Error;

use botshop_core::seed;
use botshop_core::types::{
    BotId, Broadcast, BroadcastId, BroadcastStatus, Dashboard, Product, ProductForm, ProductId,
};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A previous holder panicked while writing; the data can no longer be
    /// trusted.
    #[error("store lock poisoned")]
    Poisoned,
}

/// The shared mutable store.
#[derive(Debug)]
pub struct Store {
    data: RwLock<Dashboard>,
}

impl Store {
    /// Create a store over the given data.
    #[must_use]
    pub fn new(data: Dashboard) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Create a store initialized with the fixed seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::dashboard())
    }

    /// Clone the full contents of the store.
    ///
    /// This is the snapshot the dashboard endpoint serves; repeated calls on
    /// an unmutated store return identical data.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock was poisoned.
    pub fn snapshot(&self) -> Result<Dashboard, StoreError> {
        Ok(self.read()?.clone())
    }

    /// Append a new product built from `form`.
    ///
    /// The product gets a freshly minted timestamp ID and the fixed seed bot
    /// ID; absent form fields stay at their defaults. Returns the created
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock was poisoned.
    pub fn insert_product(&self, form: ProductForm) -> Result<Product, StoreError> {
        let mut data = self.write()?;
        let mut product = Product::new(ProductId::generate(), BotId::new(seed::SEED_BOT_ID));
        product.apply(form);
        data.products.push(product.clone());
        Ok(product)
    }

    /// Shallow-merge `form` over the product with the given ID.
    ///
    /// Returns `Ok(None)` when no product matches; the collection is left
    /// untouched in that case.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock was poisoned.
    pub fn update_product(
        &self,
        id: &ProductId,
        form: ProductForm,
    ) -> Result<Option<Product>, StoreError> {
        let mut data = self.write()?;
        let Some(product) = data.products.iter_mut().find(|p| &p.id == id) else {
            return Ok(None);
        };
        product.apply(form);
        Ok(Some(product.clone()))
    }

    /// Remove the product with the given ID, if present.
    ///
    /// Removal is unconditional: deleting an unknown ID is not an error and
    /// leaves the collection unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock was poisoned.
    pub fn remove_product(&self, id: &ProductId) -> Result<(), StoreError> {
        self.write()?.products.retain(|p| &p.id != id);
        Ok(())
    }

    /// Record a broadcast to all current users.
    ///
    /// No delivery happens; the broadcast is stamped with the current time,
    /// the user count at send time, and a fixed `sent` status, then appended
    /// to the log. Returns the created record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock was poisoned.
    pub fn record_broadcast(&self, message: String) -> Result<Broadcast, StoreError> {
        let mut data = self.write()?;
        let broadcast = Broadcast {
            id: BroadcastId::generate(),
            message,
            sent_at: Utc::now(),
            recipients: data.users.len() as u64,
            status: BroadcastStatus::Sent,
        };
        data.broadcasts.push(broadcast.clone());
        Ok(broadcast)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Dashboard>, StoreError> {
        self.data.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Dashboard>, StoreError> {
        self.data.write().map_err(|_| StoreError::Poisoned)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_insert_product_mints_id_and_bot() {
        let store = Store::seeded();
        let created = store
            .insert_product(ProductForm {
                name: Some("BCAA".to_owned()),
                price: Some(Decimal::new(1999, 2)),
                ..ProductForm::default()
            })
            .unwrap();

        assert_eq!(created.bot_id.as_str(), seed::SEED_BOT_ID);
        assert!(created.image.is_none());
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.products.len(), 3);
        assert_eq!(
            snapshot
                .products
                .iter()
                .filter(|p| p.id == created.id)
                .count(),
            1
        );
    }

    #[test]
    fn test_update_product_merges_fields() {
        let store = Store::seeded();
        let updated = store
            .update_product(
                &ProductId::new("1"),
                ProductForm {
                    stock: Some(7),
                    ..ProductForm::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.stock, 7);
        // Fields not in the form are preserved.
        assert_eq!(updated.name, "Whey Protein Isolate");
        assert_eq!(updated.image.as_deref(), Some("/uploads/whey-protein.jpg"));
    }

    #[test]
    fn test_update_unknown_product_returns_none() {
        let store = Store::seeded();
        let result = store
            .update_product(&ProductId::new("999"), ProductForm::default())
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.snapshot().unwrap().products.len(), 2);
    }

    #[test]
    fn test_remove_product_is_unconditional() {
        let store = Store::seeded();
        store.remove_product(&ProductId::new("999")).unwrap();
        assert_eq!(store.snapshot().unwrap().products.len(), 2);

        store.remove_product(&ProductId::new("1")).unwrap();
        assert_eq!(store.snapshot().unwrap().products.len(), 1);
    }

    #[test]
    fn test_record_broadcast_counts_current_users() {
        let store = Store::seeded();
        let broadcast = store.record_broadcast("Hello".to_owned()).unwrap();

        assert_eq!(broadcast.recipients, 2);
        assert_eq!(broadcast.status, BroadcastStatus::Sent);
        assert_eq!(store.snapshot().unwrap().broadcasts.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached_from_the_store() {
        let store = Store::seeded();
        let before = store.snapshot().unwrap();
        store.record_broadcast("x".to_owned()).unwrap();
        assert!(before.broadcasts.is_empty());
    }
}
