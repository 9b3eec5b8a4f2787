//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/travel-verify/config.toml

pub mod defaults;

use crate::catalog::Catalog;
use crate::constants::paths::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use crate::ledger::FileLedger;
use crate::verify::VerificationPolicy;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Verification policy
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Place catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Ledger storage
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Verification policy settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Maximum photo-to-place distance in kilometres
    #[serde(default = "default_threshold_km")]
    pub threshold_km: f64,

    /// Points per verified visit
    #[serde(default = "default_points")]
    pub points: u32,
}

/// Catalog settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// TOML catalog file; empty means the built-in catalog
    #[serde(default)]
    pub path: String,
}

/// Ledger settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Ledger JSON file; empty means the XDG data directory
    #[serde(default)]
    pub path: String,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

// Default value functions for serde
fn default_threshold_km() -> f64 {
    DEFAULT_THRESHOLD_KM
}
fn default_points() -> u32 {
    DEFAULT_POINTS
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            threshold_km: default_threshold_km(),
            points: default_points(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path
    ///
    /// Creates default config there if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["verification", "threshold_km"] => Some(self.verification.threshold_km.to_string()),
            ["verification", "points"] => Some(self.verification.points.to_string()),
            ["catalog", "path"] => Some(self.catalog.path.clone()),
            ["ledger", "path"] => Some(self.ledger.path.clone()),
            ["output", "format"] => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["verification", "threshold_km"] => {
                let threshold: f64 = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid threshold value: {}", value))
                })?;
                VerificationPolicy::new(threshold, self.verification.points)
                    .map_err(|e| Error::Config(e.to_string()))?;
                self.verification.threshold_km = threshold;
            }
            ["verification", "points"] => {
                self.verification.points = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid points value: {}", value))
                })?;
            }
            ["catalog", "path"] => {
                self.catalog.path = value.to_string();
            }
            ["ledger", "path"] => {
                self.ledger.path = value.to_string();
            }
            ["output", "format"] => {
                if crate::format::get_formatter(value).is_none() {
                    return Err(crate::format::unknown_format(value));
                }
                self.output.format = value.to_string();
            }
            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "verification.threshold_km",
            "verification.points",
            "catalog.path",
            "ledger.path",
            "output.format",
        ]
    }

    /// Build the validated verification policy
    pub fn policy(&self) -> Result<VerificationPolicy> {
        VerificationPolicy::new(self.verification.threshold_km, self.verification.points)
    }

    /// Load the configured catalog (built-in when no path is set)
    pub fn load_catalog(&self) -> Result<Catalog> {
        if self.catalog.path.is_empty() {
            Ok(Catalog::builtin())
        } else {
            Catalog::load_from(Path::new(&self.catalog.path))
        }
    }

    /// Open the configured ledger (XDG data directory when no path is set)
    pub fn open_ledger(&self) -> Result<FileLedger> {
        let ledger = if self.ledger.path.is_empty() {
            FileLedger::load()?
        } else {
            FileLedger::load_from(PathBuf::from(&self.ledger.path))?
        };
        Ok(ledger)
    }
}
