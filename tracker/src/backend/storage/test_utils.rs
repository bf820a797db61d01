/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// The temporary directory is removed when the environment is dropped,
/// even if a test panics.
use anyhow::Result;
use tempfile::TempDir;

use super::debt_repository::DebtRepository;
use super::file_store::FileKeyValueStore;
use crate::backend::domain::debt_store::DebtStore;

/// Test environment that provides a temporary directory and a file store on it
pub struct TestEnvironment {
    pub store: FileKeyValueStore,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        init_test_logging();
        let temp_dir = TempDir::new()?;
        let store = FileKeyValueStore::new(temp_dir.path())?;
        Ok(Self {
            store,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    pub fn repository(&self) -> DebtRepository<FileKeyValueStore> {
        DebtRepository::new(self.store.clone())
    }

    /// Open a store over this environment's data, as a fresh process would
    pub fn open_store(&self) -> Result<DebtStore<DebtRepository<FileKeyValueStore>>> {
        DebtStore::open(self.repository())
    }
}

/// Route `log` output through env_logger's test writer; safe to call repeatedly
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
