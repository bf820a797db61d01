//! # Storage Module
//!
//! Handles persistence of the debt collection.
//!
//! The whole collection is written as one JSON value under a single fixed key
//! of a key-value store. The key-value store is a trait so the same repository
//! works against files on disk or an in-memory map.
//!
//! ## Layout
//!
//! ```text
//! data/
//! ├── tracker_config.yaml          ← configuration (see backend::config)
//! ├── debt-tracker-data.json       ← the debt collection
//! └── debt-tracker-data.corrupt.json  ← unreadable blob preserved on load
//! ```

pub mod debt_repository;
pub mod file_store;
pub mod memory_store;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use debt_repository::{DebtRepository, CURRENT_SCHEMA_VERSION, STORAGE_KEY};
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use traits::{DebtStorage, KeyValueStore};
