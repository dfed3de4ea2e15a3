//! Command-line interface definitions for projtree.
//!
//! This module contains the CLI argument parsing structure using clap's
//! derive macros.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for projtree.
#[derive(Parser)]
#[command(
    name = "ptree",
    version = crate::VERSION,
    about = "Project tree generator with gitignore-like filtering",
    long_about = "Renders an indented tree of a directory hierarchy, honoring ignore \
                  patterns loaded from a rules file, the command line, and configuration"
)]
pub struct Cli {
    /// Project root directory to render
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Ignore rules file (gitignore-like), one pattern per line
    #[arg(short = 'i', long)]
    pub ignore_file: Option<PathBuf>,

    /// Additional ignore pattern (may be repeated)
    #[arg(short = 'p', long = "pattern", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Specific file or directory to exclude (may be repeated)
    #[arg(short = 'x', long = "exclude", value_name = "PATH")]
    pub excludes: Vec<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completion scripts and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
