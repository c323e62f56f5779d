//! Collaborator traits for the inventory and sales stores.
//!
//! The engine never talks to the hosted store directly. It reads through
//! these two traits, which keeps resolution and projection testable with the
//! in-memory implementations provided here.
//!
//! # Error Handling
//!
//! When implementing the traits for a real store, return
//! `Error::CollaboratorUnavailable` for:
//! - Connectivity issues
//! - Query timeouts
//! - Rows that fail to decode
//!
//! A missing unit is `Ok(None)`, not an error.

use crate::entity::{InventoryUnit, SaleTransaction};
use crate::error::Result;
use crate::filter::SaleFilter;
use std::collections::HashMap;

/// Read-only access to units registered at intake.
#[allow(async_fn_in_trait)]
pub trait InventoryRepository: Send + Sync {
    /// Look up a unit by serial.
    ///
    /// # Returns
    /// - `Ok(Some(unit))` - Unit found
    /// - `Ok(None)` - No unit with this serial
    /// - `Err(e)` - Store error
    ///
    /// # Errors
    /// Returns `Err` if the store is unavailable or the lookup fails
    async fn lookup(&self, serial: &str) -> Result<Option<InventoryUnit>>;
}

/// Read-only access to completed sales.
#[allow(async_fn_in_trait)]
pub trait SalesRepository: Send + Sync {
    /// Fetch transactions matching `filter`, most recent sale first.
    ///
    /// Implementations may filter coarsely (per transaction); the projector
    /// re-applies item-level criteria.
    ///
    /// # Errors
    /// Returns `Err` if the store is unavailable or the query fails
    async fn query(&self, filter: &SaleFilter) -> Result<Vec<SaleTransaction>>;
}

// ============================================================================
// In-Memory Repositories
// ============================================================================

/// In-memory inventory keyed by serial.
///
/// ```ignore
/// let mut inventory = InMemoryInventory::new();
/// inventory.insert(unit);
/// let found = inventory.lookup("C02XK1ABJGH5").await?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryInventory {
    units: HashMap<String, InventoryUnit>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a unit under its serial.
    pub fn insert(&mut self, unit: InventoryUnit) {
        self.units.insert(unit.serial.clone(), unit);
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl InventoryRepository for InMemoryInventory {
    async fn lookup(&self, serial: &str) -> Result<Option<InventoryUnit>> {
        Ok(self.units.get(serial).cloned())
    }
}

/// In-memory sales store.
///
/// Applies the filter per transaction: a transaction is returned when it
/// matches the customer and date criteria and at least one of its line items
/// matches the item criteria.
#[derive(Clone, Debug, Default)]
pub struct InMemorySales {
    transactions: Vec<SaleTransaction>,
}

impl InMemorySales {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON array of transactions, as exported by the hosted store.
    ///
    /// # Errors
    /// Returns `Error::CollaboratorUnavailable` if the payload is malformed
    pub fn from_json(payload: &str) -> Result<Self> {
        let transactions: Vec<SaleTransaction> = serde_json::from_str(payload)?;
        Ok(InMemorySales { transactions })
    }

    pub fn insert(&mut self, transaction: SaleTransaction) {
        self.transactions.push(transaction);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl SalesRepository for InMemorySales {
    async fn query(&self, filter: &SaleFilter) -> Result<Vec<SaleTransaction>> {
        let mut matched: Vec<SaleTransaction> = self
            .transactions
            .iter()
            .filter(|tx| filter.matches_transaction(tx))
            .filter(|tx| tx.items.iter().any(|item| filter.matches_item(item)))
            .cloned()
            .collect();

        // stable: same-day sales keep insertion order
        matched.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
        Ok(matched)
    }
}
