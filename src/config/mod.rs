// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for extsort-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. extsort.toml (cwd, optional)
//! 3. --config FILE...
//! 4. EXTSORT__* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! EXTSORT__SORT__MAX_CONCURRENCY=32   → sort.max_concurrency = 32
//! EXTSORT__GLOBAL__LOG_FILE=run.log   → global.log_file = "run.log"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, SortConfig};

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "extsort.toml";

/// Prefix of the environment variables that override config keys.
pub const ENV_PREFIX: &str = "EXTSORT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Sorting engine options.
    pub sort: SortConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use extsort_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("extsort.toml")
    ///     .with_env_prefix("EXTSORT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values that deserialize fine but cannot drive a run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `sort.max_concurrency` is zero.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.sort.max_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                section: "sort".to_string(),
                key: "max_concurrency".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
