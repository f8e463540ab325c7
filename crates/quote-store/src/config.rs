//! # Quotation Configuration
//!
//! Settings that outlive a single document.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     QUOTE_DATA_DIR=/srv/quotations                                     │
//! │     QUOTE_VAT_ENABLED=false                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/quotation/config.toml (Linux)                            │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     unit หน่วย, VAT on, platform data directory                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [company]
//! name = "บริษัท ตัวอย่าง จำกัด"
//! phone = "02-000-0000"
//! taxId = "0105551234567"
//!
//! [document]
//! default_unit = "ชุด"
//! vat_enabled = true
//!
//! [storage]
//! data_dir = "/home/sales/quotations"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use quote_core::types::{CompanyInfo, DEFAULT_UNIT};
use quote_core::validation::validate_tax_id;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Document Settings
// =============================================================================

/// Defaults applied to new documents and rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSettings {
    /// Unit label for newly added rows.
    #[serde(default = "default_unit")]
    pub default_unit: String,

    /// Whether new documents start with VAT switched on.
    #[serde(default = "default_true")]
    pub vat_enabled: bool,
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DocumentSettings {
    fn default() -> Self {
        DocumentSettings {
            default_unit: default_unit(),
            vat_enabled: true,
        }
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

/// Where quotation records are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory for `quotation_*.json` files. Platform data dir when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Issuer printed in the letterhead.
    #[serde(default)]
    pub company: CompanyInfo,

    #[serde(default)]
    pub document: DocumentSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl QuoteConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (config.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| StoreError::ConfigLoadFailed(e.to_string()))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| StoreError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if self.document.default_unit.trim().is_empty() {
            return Err(StoreError::InvalidConfig(
                "document.default_unit must not be empty".into(),
            ));
        }

        validate_tax_id(&self.company.tax_id)
            .map_err(|e| StoreError::InvalidConfig(format!("company: {}", e)))?;

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("QUOTE_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(unit) = lookup("QUOTE_DEFAULT_UNIT") {
            self.document.default_unit = unit;
        }

        if let Some(vat) = lookup("QUOTE_VAT_ENABLED") {
            match vat.to_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => self.document.vat_enabled = true,
                "0" | "false" | "off" | "no" => self.document.vat_enabled = false,
                _ => warn!(value = %vat, "Unknown QUOTE_VAT_ENABLED value in environment"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Directory quotation records are saved to.
    ///
    /// Falls back to the current directory when no platform data dir exists.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "quotation", "quotation")
}
