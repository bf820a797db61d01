//! # Debt Repository
//!
//! Persists the whole debt collection as one JSON value under a fixed key.
//!
//! ## Format
//!
//! ```json
//! { "version": 1, "debts": [ { "id": "…", "debtorName": "John", "amount": "100.00", … } ] }
//! ```
//!
//! ## Load rules
//!
//! - Key absent: empty collection
//! - Bare JSON array: unversioned data from before the envelope existed;
//!   migrated in memory and written back in the envelope on the next save
//! - Unreadable content or a newer schema version: the raw value is copied to
//!   `<key>.corrupt`, a warning is logged and loading continues with an empty
//!   collection
//! - If that copy cannot be written, loading fails instead, so the original
//!   value is never overwritten by a later save
//!
//! Read and write failures of the underlying store are returned as errors.

use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use super::traits::{DebtStorage, KeyValueStore};
use crate::backend::domain::models::Debt;

/// Fixed key the collection lives under
pub const STORAGE_KEY: &str = "debt-tracker-data";

/// Schema version written by this build
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoredDebtsRef<'a> {
    version: u32,
    debts: &'a [Debt],
}

#[derive(Deserialize)]
struct StoredDebts {
    version: u32,
    #[serde(default)]
    debts: Vec<Debt>,
}

#[derive(Debug, Clone)]
pub struct DebtRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> DebtRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key an unreadable blob is preserved under
    pub fn corrupt_key(&self) -> String {
        format!("{}.corrupt", self.key)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decode a stored blob, migrating the unversioned array format
    pub fn decode(raw: &str) -> Result<Vec<Debt>> {
        let value: serde_json::Value = serde_json::from_str(raw)?;

        if value.is_array() {
            let debts: Vec<Debt> = serde_json::from_value(value)?;
            info!("Migrating {} debts from the unversioned format", debts.len());
            Ok(debts)
        } else if value.is_object() {
            let stored: StoredDebts = serde_json::from_value(value)?;
            if stored.version > CURRENT_SCHEMA_VERSION {
                return Err(anyhow!(
                    "Stored debts use schema version {}, newest supported is {}",
                    stored.version,
                    CURRENT_SCHEMA_VERSION
                ));
            }
            Ok(stored.debts)
        } else {
            Err(anyhow!("Stored debts must be a JSON array or object"))
        }
    }

    /// Encode the collection in the current envelope format
    pub fn encode(debts: &[Debt]) -> Result<String> {
        let stored = StoredDebtsRef {
            version: CURRENT_SCHEMA_VERSION,
            debts,
        };
        Ok(serde_json::to_string(&stored)?)
    }

    fn preserve_unreadable(&self, raw: &str) -> Result<()> {
        let corrupt_key = self.corrupt_key();
        if let Err(e) = self.store.set(&corrupt_key, raw) {
            error!("Failed to preserve unreadable debt data: {}", e);
            return Err(e.context(format!(
                "Stored debts under '{}' are unreadable and could not be copied to '{}'",
                self.key, corrupt_key
            )));
        }
        warn!("Preserved unreadable debt data under '{}'", corrupt_key);
        Ok(())
    }
}

impl<S: KeyValueStore> DebtStorage for DebtRepository<S> {
    fn load_debts(&self) -> Result<Vec<Debt>> {
        let Some(raw) = self.store.get(&self.key)? else {
            info!("No stored debts under '{}', starting empty", self.key);
            return Ok(Vec::new());
        };

        match Self::decode(&raw) {
            Ok(debts) => {
                info!("Loaded {} debts from '{}'", debts.len(), self.key);
                Ok(debts)
            }
            Err(e) => {
                warn!(
                    "Stored debts under '{}' are unreadable ({}); starting with an empty collection",
                    self.key, e
                );
                self.preserve_unreadable(&raw)?;
                Ok(Vec::new())
            }
        }
    }

    fn save_debts(&self, debts: &[Debt]) -> Result<()> {
        let raw = Self::encode(debts)?;
        self.store.set(&self.key, &raw)?;
        debug!("Saved {} debts to '{}'", debts.len(), self.key);
        Ok(())
    }

    fn clear_debts(&self) -> Result<()> {
        if self.store.remove(&self.key)? {
            info!("Cleared stored debts under '{}'", self.key);
        }
        Ok(())
    }
}
