//! CLI argument definitions.
//!
//! Only the global options are parsed by clap; everything after them is
//! handed to the dispatcher untouched, so subcommands keep full control
//! of their own arguments.

use clap::Parser;
use std::path::PathBuf;

/// gather - Plugin registration and subcommand dispatch.
#[derive(Debug, Parser)]
#[command(name = "gather")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to settings file (overrides default .gather/config.yml)
    #[arg(short, long, env = "GATHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Subcommand followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
