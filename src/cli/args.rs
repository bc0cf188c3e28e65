//! CLI argument definitions.
//!
//! Every flag is optional: running `tddcheck` with no arguments verifies the
//! current directory with default settings.

use clap::Parser;
use std::path::PathBuf;

/// Verify that a local development environment is ready for test-driven development.
#[derive(Debug, Parser)]
#[command(name = "tddcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to settings file (overrides default .tddcheck.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
