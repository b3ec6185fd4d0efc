//! Prune command handler
//!
//! Confirms the plan, then runs it on a worker thread while the main thread
//! waits. The first Ctrl+C stops the run before its next step; a second one
//! also cuts a pending step delay short, which aborts the run.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use modtrim::application::{PruneOptions, PruneTask};
use modtrim::config::Config;
use modtrim::domain::ports::RemovalEventSink;
use modtrim::infrastructure::{CancellationToken, JsonEventSink, PaceInterrupter};
use modtrim::presentation::{create_prune_use_case, PruneWiring};

use crate::ui::context::UiContext;
use crate::ui::views::plan::render_plan;
use crate::ui::views::progress::ConsoleEventSink;
use crate::ui::views::prune::{render_prune_header, render_prune_result};

/// Exit status of a run stopped by Ctrl+C
const EXIT_CANCELLED: i32 = 130;

pub fn cmd_prune(
    project: &Path,
    module: &str,
    yes: bool,
    dry_run: bool,
    config: &Config,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let ui = UiContext::new(json, verbose);
    let (model, modules) = super::open_project(project)?;
    let root = model.root().to_path_buf();

    let events: Arc<dyn RemovalEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(ui))
    };
    let PruneWiring {
        use_case,
        token,
        interrupter,
    } = create_prune_use_case(model, config, events).context("cannot start mutation thread")?;

    let Some(plan) = use_case.plan(module)? else {
        super::report_unknown_module(module, json);
        return Ok(());
    };

    if !json {
        print!("{}", render_prune_header(&root, dry_run, ui.color, ui.unicode));
        print!("{}", render_plan(&plan, &modules, &root, ui.color, ui.unicode));
        println!();
    }

    let options = PruneOptions::new(module).with_dry_run(dry_run);

    if !dry_run && !yes && !json && !plan.is_noop() {
        use dialoguer::Confirm;
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove {} modules and {} test roots?",
                plan.dispose().len(),
                plan.test_roots().len()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    install_interrupt_handler(token, interrupter)?;

    let report = PruneTask::spawn(use_case, options)?.join()?;

    if !json {
        print!("{}", render_prune_result(&report, &root, ui.color, ui.unicode));
    }

    if report.cancelled {
        std::process::exit(EXIT_CANCELLED);
    }
    Ok(())
}

fn install_interrupt_handler(token: CancellationToken, interrupter: PaceInterrupter) -> Result<()> {
    let presses = AtomicUsize::new(0);
    ctrlc::set_handler(move || {
        if presses.fetch_add(1, Ordering::SeqCst) == 0 {
            eprintln!("\nStopping after the current step (Ctrl+C again to abort now)...");
            token.cancel();
        } else {
            interrupter.interrupt();
        }
    })
    .context("Failed to set Ctrl+C handler")
}
