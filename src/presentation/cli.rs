//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --project, --verbose) are inherited by all subcommands
//! - `prune` asks before deleting unless --yes, --json or --dry-run is given

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// modtrim - shrink a multi-module project to what one module needs
#[derive(Parser, Debug)]
#[command(name = "modtrim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Project directory holding modtrim.toml
    #[arg(short, long, global = true, value_name = "DIR", default_value = ".")]
    pub project: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show what pruning to MODULE would keep and remove
    Plan {
        /// Module that must stay buildable
        module: String,
    },

    /// Remove every module MODULE does not need, then strip remaining test roots
    Prune {
        /// Module that must stay buildable
        module: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },
}
