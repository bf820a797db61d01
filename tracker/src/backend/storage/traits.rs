//! # Storage Traits
//!
//! Storage abstractions used by the domain layer. Operations are synchronous;
//! the tracker runs every operation to completion on the caller's thread.

use anyhow::Result;

use crate::backend::domain::models::Debt;

/// A string key-value store, the shape of browser-style local storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, None if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; returns true if something was removed
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Trait defining the interface for debt collection persistence
pub trait DebtStorage: Send + Sync {
    /// Load the whole collection; an absent collection is empty
    fn load_debts(&self) -> Result<Vec<Debt>>;

    /// Replace the stored collection with `debts`
    fn save_debts(&self, debts: &[Debt]) -> Result<()>;

    /// Remove the stored collection entirely
    fn clear_debts(&self) -> Result<()>;
}
