//! TOML configuration file support.
//!
//! Settings that rarely change between runs of the same pipeline can live in a
//! config file instead of being repeated on the command line:
//!
//! ```toml
//! # scan-repair.toml
//! [repair]
//! column = "First Scan"
//! pattern = '\.\d+\.'
//! ```
//!
//! Flags given on the command line take precedence.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for scan-repair.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Repair settings.
    #[serde(default)]
    pub repair: RepairConfig,
}

/// Configuration for the repair run.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepairConfig {
    /// Name of the scan column.
    pub column: Option<String>,

    /// Regex locating the scan number in spectrum titles.
    pub pattern: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
