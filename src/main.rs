//! modtrim CLI - shrink a multi-module project to one module's needs
//!
//! Usage: modtrim [--project DIR] [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   plan   Show what pruning to a module would keep and remove
//!   prune  Remove everything a module does not need

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use modtrim::config::Config;
use modtrim::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = Config::load_or_default(Some(cli.project.as_path()));
    if let Err(e) = modtrim::logging::init(config.output.verbosity, cli.verbose) {
        eprintln!("warning: logging disabled: {}", e);
    }
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Plan { module } => {
            commands::plan::cmd_plan(&cli.project, &module, &config, cli.json, cli.verbose)
        }
        Commands::Prune {
            module,
            yes,
            dry_run,
        } => commands::prune::cmd_prune(
            &cli.project,
            &module,
            yes,
            dry_run,
            &config,
            cli.json,
            cli.verbose,
        ),
    }
}
