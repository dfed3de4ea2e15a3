//! Configuration parsing and management.
//!
//! Projtree reads a small TOML configuration file (default:
//! `~/.config/projtree/config`) holding always-applied ignore patterns and
//! traversal options. A missing file is created with defaults on first use.

#![allow(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level configuration for projtree.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub tracking: TrackingConfig,
}

/// Core options: where to find the default ignore rules file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoreConfig {
    /// Ignore rules file used when none is given on the command line.
    #[serde(default)]
    pub ignore_file: Option<PathBuf>,
}

/// Traversal options and always-applied ignore patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Patterns applied to every generation, before any other source.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Whether directory symlinks are expanded during traversal.
    #[serde(default = "default_follow_symlinks")]
    pub follow_symlinks: bool,
}

fn default_follow_symlinks() -> bool {
    true
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: Vec::new(),
            follow_symlinks: true,
        }
    }
}

impl Config {
    /// Load configuration from a file, creating it with defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if a default file cannot be written.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot write to the file
    /// - TOML serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(toml_str.as_bytes())?;
        Ok(())
    }
}
