//! File-backed key-value store: one `<key>.json` file per key under a base
//! directory. Writes go to a temp file first and are renamed into place.

use anyhow::{anyhow, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_directory: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `base_directory`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(anyhow!("Invalid storage key: '{}'", key));
        }
        Ok(self.base_directory.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            debug!("No stored value for '{}' at {}", key, path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        debug!("Read {} bytes for '{}'", content.len(), key);
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Wrote {} bytes for '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(&path)?;
            info!("Removed stored value for '{}'", key);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
