//! # Tracker Configuration
//!
//! A single YAML file `tracker_config.yaml` at the root of the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_directory: "/home/me/.local/share/Debt Tracker"
//! storage_key: "debt-tracker-data"
//! currency_symbol: "$"
//! date_format: ShortDate
//! config_format_version: "1.0"
//! ```
//!
//! The data directory defaults to the platform data directory
//! (`dirs::data_dir()/Debt Tracker`); the `DEBT_TRACKER_DATA_DIR` environment
//! variable overrides it. Missing fields fall back to their defaults, and the
//! file is written with defaults on first run.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::domain::debt_form::DebtFormConfig;
use crate::backend::domain::debt_table::{DateFormat, DebtTableConfig};
use crate::backend::storage::STORAGE_KEY;

pub const CONFIG_FILE_NAME: &str = "tracker_config.yaml";

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "DEBT_TRACKER_DATA_DIR";

const APP_DIRECTORY_NAME: &str = "Debt Tracker";
const CONFIG_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    /// Where the debt collection and this file live
    pub data_directory: PathBuf,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_date_format")]
    pub date_format: DateFormat,
    /// Config format version for future migrations
    #[serde(default = "default_config_format_version")]
    pub config_format_version: String,
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_date_format() -> DateFormat {
    DateFormat::ShortDate
}

fn default_config_format_version() -> String {
    CONFIG_FORMAT_VERSION.to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::for_directory(default_data_directory())
    }
}

impl TrackerConfig {
    /// Default settings with data kept under `data_directory`
    pub fn for_directory<P: AsRef<Path>>(data_directory: P) -> Self {
        Self {
            data_directory: data_directory.as_ref().to_path_buf(),
            storage_key: default_storage_key(),
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
            config_format_version: default_config_format_version(),
        }
    }

    /// Load the config from the default data directory, creating it if needed
    pub fn load() -> Result<Self> {
        Self::load_or_create(default_data_directory())
    }

    /// Load `tracker_config.yaml` from `directory`, writing defaults if absent
    pub fn load_or_create<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref();
        let config_path = Self::config_path(directory);

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: TrackerConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Invalid tracker config at {}", config_path.display()))?;
            if config.config_format_version != CONFIG_FORMAT_VERSION {
                warn!(
                    "Tracker config version {} differs from {}",
                    config.config_format_version, CONFIG_FORMAT_VERSION
                );
            }
            debug!("Loaded tracker config from {:?}", config_path);
            Ok(config)
        } else {
            let config = Self::for_directory(directory);
            config.save_to(directory)?;
            info!("Created default tracker config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Write the config into `directory` using a temp file and rename
    pub fn save_to<P: AsRef<Path>>(&self, directory: P) -> Result<()> {
        let directory = directory.as_ref();
        if !directory.exists() {
            fs::create_dir_all(directory)?;
            info!("Created data directory: {:?}", directory);
        }

        let config_path = Self::config_path(directory);
        let yaml_content = serde_yaml::to_string(self)?;

        let temp_path = config_path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &config_path)?;

        debug!("Saved tracker config to {:?}", config_path);
        Ok(())
    }

    pub fn config_path(directory: &Path) -> PathBuf {
        directory.join(CONFIG_FILE_NAME)
    }

    pub fn table_config(&self) -> DebtTableConfig {
        DebtTableConfig {
            currency_symbol: self.currency_symbol.clone(),
            date_format: self.date_format,
        }
    }

    pub fn form_config(&self) -> DebtFormConfig {
        DebtFormConfig {
            currency_symbol: self.currency_symbol.clone(),
            ..DebtFormConfig::default()
        }
    }
}

/// Data directory from `DEBT_TRACKER_DATA_DIR`, else the platform default
pub fn default_data_directory() -> PathBuf {
    resolve_data_directory(std::env::var_os(DATA_DIR_ENV))
}

fn resolve_data_directory(override_dir: Option<OsString>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    match dirs::data_dir() {
        Some(base) => base.join(APP_DIRECTORY_NAME),
        None => {
            warn!("No platform data directory, falling back to the temp directory");
            std::env::temp_dir().join(APP_DIRECTORY_NAME)
        }
    }
}
