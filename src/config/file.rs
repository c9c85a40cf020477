//! Configuration file support for persistent settings.
//!
//! This module loads optional settings from a TOML file located at
//! `~/.config/sizescan/config.toml` (or the platform-specific equivalent):
//! the pagination page size, user-defined extension libraries, and the
//! staleness threshold used by `--useless`. File values fill in where the
//! hardcoded defaults would otherwise apply.
//!
//! # Example config
//!
//! ```toml
//! page_size = 25
//!
//! [libraries]
//! ebooks = ["epub", "mobi"]   # adds to / overrides the default catalog
//!
//! [stale]
//! days = 0
//! months = 1
//! years = 0
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in
/// the config file and fall back to defaults for the rest.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Number of entry lines printed per pagination page.
    pub page_size: Option<usize>,

    /// User-defined libraries, merged over the built-in catalog.
    pub libraries: Option<BTreeMap<String, Vec<String>>>,

    /// Staleness threshold for `--useless`.
    #[serde(default)]
    pub stale: FileStaleConfig,
}

/// Staleness threshold from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileStaleConfig {
    /// Whole days.
    pub days: Option<u32>,

    /// Whole months.
    pub months: Option<u32>,

    /// Whole years.
    pub years: Option<u32>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/sizescan/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux/macOS, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sizescan").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty)
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read, or
    /// contains invalid TOML.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}
