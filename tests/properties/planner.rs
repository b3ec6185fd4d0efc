//! Property tests for the removal planner.

use std::collections::HashSet;

use proptest::prelude::*;

use modtrim::domain::ports::ModuleRegistry;
use modtrim::{DependencyClosureBuilder, ModuleId, RemovalPlanner};

use crate::closure::graph;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Kept and disposed modules partition the project.
    #[test]
    fn property_keep_and_dispose_partition(g in graph(), pick in any::<prop::sample::Index>()) {
        let (project, ids) = g.build();
        let seed = ids[pick.index(ids.len())];
        let closure = DependencyClosureBuilder::new(&project, &project).build(seed);

        let plan = RemovalPlanner::plan(project.modules(), closure, seed);

        let disposed: HashSet<ModuleId> = plan.dispose().iter().map(|m| m.id()).collect();
        prop_assert_eq!(disposed.len(), plan.dispose().len());
        for id in &ids {
            prop_assert!(plan.closure().contains(*id) != disposed.contains(id));
        }
        prop_assert!(!disposed.contains(&seed));
    }

    /// PROPERTY: Test roots come from kept modules other than the seed.
    #[test]
    fn property_test_roots_exclude_seed(g in graph(), pick in any::<prop::sample::Index>()) {
        let (project, ids) = g.build();
        let seed = ids[pick.index(ids.len())];
        let closure = DependencyClosureBuilder::new(&project, &project).build(seed);

        let plan = RemovalPlanner::plan(project.modules(), closure, seed);

        let expected: Vec<_> = project
            .modules()
            .iter()
            .filter(|m| m.id() != seed && plan.closure().contains(m.id()))
            .flat_map(|m| m.test_roots().iter().cloned())
            .collect();
        prop_assert_eq!(plan.test_roots(), expected.as_slice());
        prop_assert_eq!(plan.step_count(), plan.dispose().len() + plan.test_roots().len());
    }
}
