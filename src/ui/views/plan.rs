//! Plan rendering

use std::path::Path;

use modtrim::domain::entities::{Module, RemovalPlan};

use crate::ui::primitives::icon::Icon;
use crate::ui::theme::{colors, paint, paint_bold};

fn count(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}

/// Path shown relative to the project root when it lies inside it
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

/// Render what a prune to `plan.target()` keeps and removes
pub fn render_plan(
    plan: &RemovalPlan,
    modules: &[Module],
    root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let target = modules
        .iter()
        .find(|m| m.id() == plan.target())
        .map(Module::name)
        .unwrap_or_default();

    let mut out = format!(
        "{} {}\n",
        Icon::Prune.colored(supports_color, supports_unicode),
        paint_bold(&format!("Plan for {}", target), colors::INFO, supports_color)
    );

    let keep: Vec<&Module> = modules
        .iter()
        .filter(|m| plan.closure().contains(m.id()))
        .collect();
    out.push_str(&format!("  Keep {}:\n", count(keep.len(), "module", "modules")));
    for module in keep {
        let suffix = if module.id() == plan.target() {
            paint(" (target)", colors::DIM, supports_color)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "    {} {}{}\n",
            Icon::Keep.colored(supports_color, supports_unicode),
            module.name(),
            suffix
        ));
    }

    if plan.is_noop() {
        out.push_str(&format!(
            "  {}\n",
            paint("Nothing to remove", colors::DIM, supports_color)
        ));
        return out;
    }

    if !plan.dispose().is_empty() {
        out.push_str(&format!(
            "  Remove {}:\n",
            count(plan.dispose().len(), "module", "modules")
        ));
        for module in plan.dispose() {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Remove.colored(supports_color, supports_unicode),
                module.name()
            ));
        }
    }

    if !plan.test_roots().is_empty() {
        out.push_str(&format!(
            "  Delete {}:\n",
            count(plan.test_roots().len(), "test root", "test roots")
        ));
        for path in plan.test_roots() {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                display_path(path, root)
            ));
        }
    }

    out
}

/// Machine-readable plan for `--json`
pub fn plan_json(plan: &RemovalPlan, modules: &[Module], root: &Path) -> serde_json::Value {
    let keep: Vec<&str> = modules
        .iter()
        .filter(|m| plan.closure().contains(m.id()))
        .map(Module::name)
        .collect();
    let dispose: Vec<&str> = plan.dispose().iter().map(Module::name).collect();
    let test_roots: Vec<String> = plan
        .test_roots()
        .iter()
        .map(|p| display_path(p, root))
        .collect();

    serde_json::json!({
        "event": "plan",
        "command": "plan",
        "keep": keep,
        "dispose": dispose,
        "test_roots": test_roots,
        "steps": plan.step_count(),
    })
}
