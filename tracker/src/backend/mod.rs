//! # Backend Module
//!
//! Contains all non-UI logic for the debt tracker.
//!
//! ## Architecture
//!
//! ```text
//! Presentation (forms, list, modals)
//!     ↓
//! IO Layer (DebtApi: DTOs in, formatted rows out)
//!     ↓
//! Domain Layer (DebtStore, pure debt operations)
//!     ↓
//! Storage Layer (DebtRepository over a key-value store)
//! ```
//!
//! Everything is synchronous. The backend is opened once at startup and owns
//! the debt collection until the process exits.

use anyhow::Result;
use log::info;

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use config::TrackerConfig;
use domain::{DebtFormService, DebtStore, DebtTableService};
use io::DebtApi;
use storage::{DebtRepository, FileKeyValueStore};

/// File-backed debt API used by the desktop application
pub type FileDebtApi = DebtApi<DebtRepository<FileKeyValueStore>>;

/// Main backend struct that wires configuration, storage and services
pub struct Backend {
    pub config: TrackerConfig,
    pub debt_api: FileDebtApi,
}

impl Backend {
    /// Open the backend using the config in the default data directory
    pub fn new() -> Result<Self> {
        Self::with_config(TrackerConfig::load()?)
    }

    pub fn with_config(config: TrackerConfig) -> Result<Self> {
        info!("Setting up storage in {:?}", config.data_directory);
        let store = FileKeyValueStore::new(&config.data_directory)?;
        let repository = DebtRepository::with_key(store, config.storage_key.clone());

        info!("Setting up domain model");
        let debt_store = DebtStore::open(repository)?;
        let debt_api = DebtApi::new(
            debt_store,
            DebtTableService::with_config(config.table_config()),
            DebtFormService::with_config(config.form_config()),
        );

        Ok(Backend { config, debt_api })
    }
}
