//! Prune command UI views

use std::path::Path;

use modtrim::application::PruneReport;

use crate::ui::primitives::icon::Icon;
use crate::ui::theme::{colors, paint, paint_bold};
use crate::ui::views::plan::display_path;

/// Render the prune command header
pub fn render_prune_header(
    root: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "modtrim prune (dry run)"
    } else {
        "modtrim prune"
    };
    format!(
        "{} {}\n  Project: {}\n\n",
        Icon::Prune.colored(supports_color, supports_unicode),
        paint_bold(title, colors::INFO, supports_color),
        root.display()
    )
}

/// Render the outcome of a run
pub fn render_prune_result(
    report: &PruneReport,
    root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let total = report.plan.as_ref().map(|p| p.step_count()).unwrap_or(0);
    let has_issues = report.modules_with_residue().next().is_some()
        || !report.test_roots_failed.is_empty();

    let (icon, title) = if report.cancelled {
        (
            Icon::Warning,
            format!(
                "Prune cancelled after {} of {} steps",
                report.completed_steps(),
                total
            ),
        )
    } else if report.is_complete() && total == 0 {
        (Icon::Success, "Nothing to prune".to_string())
    } else if report.is_complete() && has_issues {
        (Icon::Warning, "Prune finished with leftovers".to_string())
    } else if report.is_complete() {
        (Icon::Success, "Prune complete".to_string())
    } else {
        (Icon::Success, "Dry run complete, nothing removed".to_string())
    };

    let title_color = if icon == Icon::Success {
        colors::SUCCESS
    } else {
        colors::WARNING
    };
    let mut out = format!(
        "{} {}\n",
        icon.colored(supports_color, supports_unicode),
        paint_bold(&title, title_color, supports_color)
    );

    if report.is_complete() || report.cancelled {
        out.push_str(&format!("  {} modules removed\n", report.disposed.len()));
        out.push_str(&format!(
            "  {} test roots deleted\n",
            report.test_roots_deleted.len()
        ));
        out.push_str(&format!("  {} files deleted\n", report.files_deleted()));
    }

    for module in report.modules_with_residue() {
        out.push_str(&format!(
            "  {} {}: some files could not be deleted\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            module.name
        ));
    }
    for path in &report.test_roots_failed {
        out.push_str(&format!(
            "  {} could not delete {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            display_path(path, root)
        ));
    }

    if !report.is_complete() && !report.cancelled {
        out.push_str(&format!(
            "  {}\n",
            paint("Run without --dry-run to prune", colors::DIM, supports_color)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use modtrim::application::{DisposedModule, PruneStage, TreeDeletion};
    use std::path::PathBuf;

    fn disposed(name: &str, files: usize, failed: usize) -> DisposedModule {
        DisposedModule {
            name: name.to_string(),
            deletion: TreeDeletion {
                passes: 2,
                files_deleted: files,
                failed_attempts: failed,
                exhausted: false,
            },
        }
    }

    #[test]
    fn complete_run_lists_counts() {
        let report = PruneReport {
            stage: PruneStage::Done,
            disposed: vec![disposed("legacy", 7, 0)],
            test_roots_deleted: vec![PathBuf::from("/p/core/src/test")],
            ..PruneReport::default()
        };

        let out = render_prune_result(&report, Path::new("/p"), false, false);

        assert!(out.contains("Prune complete"));
        assert!(out.contains("1 modules removed"));
        assert!(out.contains("7 files deleted"));
    }

    #[test]
    fn leftovers_are_reported() {
        let report = PruneReport {
            stage: PruneStage::Done,
            disposed: vec![disposed("legacy", 3, 1)],
            test_roots_failed: vec![PathBuf::from("/p/core/src/test")],
            ..PruneReport::default()
        };

        let out = render_prune_result(&report, Path::new("/p"), false, false);

        assert!(out.contains("finished with leftovers"));
        assert!(out.contains("legacy: some files could not be deleted"));
        assert!(out.contains("could not delete core/src/test"));
    }

    #[test]
    fn cancelled_run_says_so() {
        let report = PruneReport {
            stage: PruneStage::DisposingModules,
            disposed: vec![disposed("a", 1, 0)],
            cancelled: true,
            ..PruneReport::default()
        };

        let out = render_prune_result(&report, Path::new("/p"), false, true);
        assert!(out.contains("Prune cancelled after 1 of 0 steps"));
    }

    #[test]
    fn dry_run_points_to_next_step() {
        let report = PruneReport {
            stage: PruneStage::Planned,
            ..PruneReport::default()
        };

        let out = render_prune_result(&report, Path::new("/p"), false, false);
        assert!(out.contains("Dry run complete"));
        assert!(out.contains("Run without --dry-run"));
    }
}
