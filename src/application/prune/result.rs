//! Prune result types

use std::path::PathBuf;

use crate::domain::entities::RemovalPlan;

use super::deleter::TreeDeletion;

/// How far a run got
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneStage {
    /// Nothing happened yet (or no target was found)
    #[default]
    Idle,
    ClosureComputed,
    Planned,
    DisposingModules,
    DeletingTestRoots,
    Done,
}

impl std::fmt::Display for PruneStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PruneStage::Idle => "idle",
            PruneStage::ClosureComputed => "closure computed",
            PruneStage::Planned => "planned",
            PruneStage::DisposingModules => "disposing modules",
            PruneStage::DeletingTestRoots => "deleting test roots",
            PruneStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// A module that was unregistered
#[derive(Debug, Clone)]
pub struct DisposedModule {
    pub name: String,
    pub deletion: TreeDeletion,
}

/// Result of a prune run
#[derive(Debug, Clone, Default)]
pub struct PruneReport {
    /// Last stage entered
    pub stage: PruneStage,
    /// Plan, once computed
    pub plan: Option<RemovalPlan>,
    /// Modules unregistered, in order
    pub disposed: Vec<DisposedModule>,
    /// Test roots removed
    pub test_roots_deleted: Vec<PathBuf>,
    /// Test roots whose removal failed
    pub test_roots_failed: Vec<PathBuf>,
    /// Cancellation stopped the run
    pub cancelled: bool,
}

impl PruneReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// No target module was found; nothing was done
    pub fn is_aborted(&self) -> bool {
        self.plan.is_none() && !self.cancelled
    }

    /// Every planned step ran
    pub fn is_complete(&self) -> bool {
        self.stage == PruneStage::Done
    }

    /// Files and directories removed across all disposed modules
    pub fn files_deleted(&self) -> usize {
        self.disposed.iter().map(|d| d.deletion.files_deleted).sum()
    }

    /// Steps finished so far
    pub fn completed_steps(&self) -> usize {
        self.disposed.len() + self.test_roots_deleted.len() + self.test_roots_failed.len()
    }

    /// Modules unregistered while deletion may have left files behind
    pub fn modules_with_residue(&self) -> impl Iterator<Item = &DisposedModule> {
        self.disposed
            .iter()
            .filter(|d| d.deletion.may_leave_residue())
    }
}
