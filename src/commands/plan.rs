//! Plan command handler
//!
//! Shows what `prune` would do without touching anything.

use std::path::Path;

use anyhow::Result;

use modtrim::config::Config;
use modtrim::presentation::create_plan_use_case;

use crate::ui::context::UiContext;
use crate::ui::views::plan::{plan_json, render_plan};

pub fn cmd_plan(project: &Path, module: &str, config: &Config, json: bool, verbose: u8) -> Result<()> {
    let ui = UiContext::new(json, verbose);
    let (model, modules) = super::open_project(project)?;
    let root = model.root().to_path_buf();

    let use_case = create_plan_use_case(model, config);
    let Some(plan) = use_case.plan(module)? else {
        super::report_unknown_module(module, json);
        return Ok(());
    };

    if json {
        println!("{}", plan_json(&plan, &modules, &root));
    } else {
        print!("{}", render_plan(&plan, &modules, &root, ui.color, ui.unicode));
    }
    Ok(())
}
