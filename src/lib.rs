#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Projtree - Ignore-Aware Project Tree Generator
//!
//! Projtree renders a textual, indented tree of a directory hierarchy while
//! honoring gitignore-like exclusion patterns. Excluded directories are
//! pruned during traversal, never descended into, and the surviving entries
//! are rendered with box-drawing connectors in a deterministic order.
//!
//! ## Architecture
//!
//! The codebase is organized into several key modules:
//!
//! - [`pattern`]: Ignore-pattern compilation, loading, and matching
//! - [`scanner`]: Filesystem traversal and tree accumulation
//! - [`render`]: Serialization of the accumulated tree into a string
//! - [`generate`]: The per-invocation entry point tying the above together
//! - [`config`]: Configuration parsing and defaults
//! - [`output`]: Output styling and verbosity control
//! - [`utils`]: Path manipulation helpers
//!
//! ## Example Usage
//!
//! ```no_run
//! use projtree::generate::TreeRequest;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut request = TreeRequest::new("~/projects/demo".into());
//! request.extra_patterns.push("*.log".to_string());
//!
//! let rendered = projtree::generate::execute(&request)?;
//! println!("{rendered}");
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Configuration parsing and management.
pub mod config;

/// Tree generation entry point and request assembly.
pub mod generate;

/// Output formatting and verbosity control.
pub mod output;

/// Ignore-pattern compilation and matching.
pub mod pattern;

/// Tree rendering with box-drawing connectors.
pub mod render;

/// Filesystem scanning and hierarchy accumulation.
pub mod scanner;

/// Utility functions and helpers.
pub mod utils;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the projtree binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file path relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/projtree/config";

/// Central context for projtree invocations.
///
/// Holds the configuration file location and its parsed contents. The
/// context itself carries no per-generation state; each generation receives
/// its inputs through an explicit [`generate::TreeRequest`].
#[derive(Debug, Clone)]
pub struct ProjtreeContext {
    /// Path to the configuration file.
    pub config_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl ProjtreeContext {
    /// Creates a new context by loading the configuration from the default
    /// path, or from `PROJTREE_CONFIG_PATH` when set.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined or the
    /// configuration file cannot be read or created.
    pub fn new() -> Result<Self> {
        let config_path = if let Ok(path) = std::env::var("PROJTREE_CONFIG_PATH") {
            PathBuf::from(path)
        } else {
            let home = dirs::home_dir().context("Could not find home directory")?;
            home.join(DEFAULT_CONFIG_PATH)
        };

        let config = config::Config::load(&config_path)?;

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Creates a new context with an explicit configuration path.
    /// This avoids the need for environment variable manipulation in tests.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be loaded or created.
    pub fn new_explicit(config_path: PathBuf) -> Result<Self> {
        let config = config::Config::load(&config_path)?;
        Ok(Self {
            config_path,
            config,
        })
    }
}
