//! Removal plan entity

use std::path::PathBuf;

use crate::domain::value_objects::ModuleSet;

use super::{Module, ModuleId};

/// What a prune run will do, computed once before anything is touched.
///
/// - `dispose`: every module outside the closure, in registry order
/// - `test_roots`: test source roots of kept modules other than the target
#[derive(Debug, Clone)]
pub struct RemovalPlan {
    target: ModuleId,
    closure: ModuleSet,
    dispose: Vec<Module>,
    test_roots: Vec<PathBuf>,
}

impl RemovalPlan {
    pub fn new(
        target: ModuleId,
        closure: ModuleSet,
        dispose: Vec<Module>,
        test_roots: Vec<PathBuf>,
    ) -> Self {
        Self {
            target,
            closure,
            dispose,
            test_roots,
        }
    }

    pub fn target(&self) -> ModuleId {
        self.target
    }

    pub fn closure(&self) -> &ModuleSet {
        &self.closure
    }

    pub fn dispose(&self) -> &[Module] {
        &self.dispose
    }

    pub fn test_roots(&self) -> &[PathBuf] {
        &self.test_roots
    }

    /// Number of progress steps the executor will run
    pub fn step_count(&self) -> usize {
        self.dispose.len() + self.test_roots.len()
    }

    pub fn is_noop(&self) -> bool {
        self.step_count() == 0
    }
}
