// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Days without a commit before a repository counts as abandoned
pub const DEFAULT_DAYS_AGO: i64 = 90;

/// File name inside the configuration directory
pub const CONFIG_FILE: &str = "config.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Settings that apply to every scan
    #[serde(rename = "Global", default)]
    pub global: Global,
}

/// The `[Global]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Global {
    /// Active window in days
    #[serde(rename = "daysago")]
    pub days_ago: i64,
}

impl Default for Global {
    fn default() -> Self {
        Self {
            days_ago: DEFAULT_DAYS_AGO,
        }
    }
}

impl Config {
    /// Read the configuration at `path`, writing the defaults there first
    /// if the file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            info!("Created default configuration at {}", path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Write the configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}

/// Default location of the configuration file
pub fn default_path() -> Result<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "gitwork")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .context("Could not determine a configuration directory for the current user")
}
