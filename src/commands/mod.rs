//! Command handlers for the modtrim binary

pub mod plan;
pub mod prune;

use std::path::Path;

use anyhow::{Context, Result};

use modtrim::domain::entities::Module;
use modtrim::domain::ports::ModuleRegistry;
use modtrim::infrastructure::TomlProjectModel;

/// Load the project manifest with the module list snapshot views need
pub(crate) fn open_project(project: &Path) -> Result<(TomlProjectModel, Vec<Module>)> {
    let model = TomlProjectModel::open(project)
        .with_context(|| format!("cannot load project at {}", project.display()))?;
    let modules = model.modules().to_vec();
    Ok((model, modules))
}

/// Printed when the target names no module; the run is a no-op
pub(crate) fn report_unknown_module(module: &str, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "aborted",
                "reason": "unknown_module",
                "module": module,
            })
        );
    } else {
        eprintln!("No module named '{}'. Nothing to do.", module);
    }
}
