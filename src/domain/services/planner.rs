//! Removal planner
//!
//! Splits the project into modules to keep and modules to dispose, and
//! collects the test roots that kept modules (other than the target) lose.

use crate::domain::entities::{Module, ModuleId, RemovalPlan};
use crate::domain::value_objects::ModuleSet;

pub struct RemovalPlanner;

impl RemovalPlanner {
    /// Build the plan for `target` from the full module list and its closure.
    ///
    /// Dispose order and test root order follow `modules`.
    pub fn plan(modules: &[Module], closure: ModuleSet, target: ModuleId) -> RemovalPlan {
        let dispose: Vec<Module> = modules
            .iter()
            .filter(|m| !closure.contains(m.id()))
            .cloned()
            .collect();

        let test_roots = modules
            .iter()
            .filter(|m| m.id() != target && closure.contains(m.id()))
            .flat_map(|m| m.test_roots().iter().cloned())
            .collect();

        RemovalPlan::new(target, closure, dispose, test_roots)
    }
}
