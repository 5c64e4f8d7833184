//! # Settings Module
//!
//! ## Purpose
//! Runtime configuration of the Chemy binary: generator seed, log level and
//! log file, and whether tables append units to extracted thermodynamic values.
//!
//! ## Key Features
//! - **JSON file**: `chemy_config.json` in the working directory by default
//! - **Defaults on absence**: a missing file is not an error, defaults are used
//! - **Seeded parsing**: `make_rng()` turns the optional seed into a `StdRng`
//!
//! ## Configuration Format
//! ```json
//! {
//!   "seed": 42,
//!   "log_level": "info",
//!   "log_file": "chemy.log",
//!   "show_units": true
//! }
//! ```
//!
//! ## Usage Pattern
//! ```rust
//! use Chemy::settings::ChemySettings;
//!
//! let settings = ChemySettings::load("no_such_config.json").unwrap();
//! assert_eq!(settings, ChemySettings::default());
//! ```

use log::{LevelFilter, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "chemy_config.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown log level '{0}', expected off, error, warn, info, debug or trace")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemySettings {
    /// fixed seed for placeholder values and metrics, entropy when absent
    pub seed: Option<u64>,
    pub log_level: String,
    pub log_file: Option<String>,
    /// append kJ/mol, J/K·mol to extracted thermodynamic values in tables
    pub show_units: bool,
}

impl Default for ChemySettings {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "info".to_string(),
            log_file: None,
            show_units: true,
        }
    }
}

impl ChemySettings {
    /// Loads settings from `config_file`; defaults when the file does not exist.
    pub fn load(config_file: &str) -> Result<Self, SettingsError> {
        if !Path::new(config_file).exists() {
            warn!("Settings file '{}' not found, using defaults", config_file);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(config_file)?;
        let settings: ChemySettings = serde_json::from_str(&content)?;
        settings.level_filter()?;
        info!("Loaded settings from '{}'", config_file);
        Ok(settings)
    }

    pub fn save(&self, config_file: &str) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_file, content)?;
        info!("Settings saved to '{}'", config_file);
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        match self.log_level.trim().to_lowercase().as_str() {
            "off" => Ok(LevelFilter::Off),
            "error" => Ok(LevelFilter::Error),
            "warn" | "warning" => Ok(LevelFilter::Warn),
            "info" => Ok(LevelFilter::Info),
            "debug" => Ok(LevelFilter::Debug),
            "trace" => Ok(LevelFilter::Trace),
            _ => Err(SettingsError::InvalidLogLevel(self.log_level.clone())),
        }
    }

    pub fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
