//! Configuration management for payrun.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::payroll::Rates;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "payrun";

/// Default employee file name.
const EMPLOYEE_FILE_NAME: &str = "employees.csv";

/// Default payroll file name.
const PAYROLL_FILE_NAME: &str = "payroll.csv";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PAYRUN_`, with `__` between
///    section and key, e.g. `PAYRUN_RATES__HRA_PERCENT`)
/// 2. TOML config file at `~/.config/payrun/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Allowance and deduction percentages.
    pub rates: Rates,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the employee CSV file.
    /// Defaults to `~/.local/share/payrun/employees.csv`
    pub employee_file: Option<PathBuf>,
    /// Path to the payroll CSV file.
    /// Defaults to `~/.local/share/payrun/payroll.csv`
    pub payroll_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `PAYRUN_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        // Double underscore separates section from key so that keys with
        // underscores of their own (hra_percent, employee_file) survive:
        // PAYRUN_RATES__HRA_PERCENT -> rates.hra_percent
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("PAYRUN_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any percentage is outside `[0, 100]`.
    pub fn validate(&self) -> Result<()> {
        let percentages = [
            ("hra_percent", self.rates.hra_percent),
            ("da_percent", self.rates.da_percent),
            ("pf_percent", self.rates.pf_percent),
        ];
        for (name, value) in percentages {
            if value < Decimal::ZERO || value > dec!(100) {
                return Err(Error::ConfigValidation {
                    message: format!("{name} must be between 0 and 100, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Get the employee file path, resolving defaults if not set.
    #[must_use]
    pub fn employee_path(&self) -> PathBuf {
        self.storage
            .employee_file
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(EMPLOYEE_FILE_NAME))
    }

    /// Get the payroll file path, resolving defaults if not set.
    #[must_use]
    pub fn payroll_path(&self) -> PathBuf {
        self.storage
            .payroll_file
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(PAYROLL_FILE_NAME))
    }
}
