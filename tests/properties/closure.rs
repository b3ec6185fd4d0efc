//! Property tests for the dependency closure.

use std::path::PathBuf;

use proptest::prelude::*;

use modtrim::domain::entities::{DescriptorId, ModuleId, ProjectDescriptor, ProjectModel};
use modtrim::domain::ports::{DescriptorResolver, ModuleRegistry};
use modtrim::DependencyClosureBuilder;

/// A random project: `size` modules, dependency edges and optional parents.
///
/// Parents may form cycles; dependency edges may point anywhere.
#[derive(Debug, Clone)]
pub struct Graph {
    pub size: usize,
    pub edges: Vec<(usize, usize)>,
    pub parents: Vec<Option<usize>>,
}

pub fn graph() -> impl Strategy<Value = Graph> {
    (1usize..12).prop_flat_map(|size| {
        (
            Just(size),
            proptest::collection::vec((0..size, 0..size), 0..size * 2),
            proptest::collection::vec(proptest::option::of(0..size), size),
        )
            .prop_map(|(size, edges, parents)| Graph {
                size,
                edges,
                parents,
            })
    })
}

impl Graph {
    pub fn build(&self) -> (ProjectModel, Vec<ModuleId>) {
        let mut project = ProjectModel::new("/p");
        let ids: Vec<ModuleId> = (0..self.size)
            .map(|i| {
                project.add_module(
                    format!("m{i}"),
                    vec![PathBuf::from(format!("/p/m{i}"))],
                    vec![PathBuf::from(format!("/p/m{i}/test"))],
                )
            })
            .collect();
        for &(from, to) in &self.edges {
            project.add_dependency(ids[from], ids[to]);
        }
        for (i, parent) in self.parents.iter().enumerate() {
            let descriptor = ProjectDescriptor::new(DescriptorId::new(format!("d{i}")))
                .with_parent(parent.map(|p| DescriptorId::new(format!("d{p}"))));
            project.set_descriptor(ids[i], descriptor);
        }
        (project, ids)
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The closure always contains its seed.
    #[test]
    fn property_closure_contains_seed(g in graph(), pick in any::<prop::sample::Index>()) {
        let (project, ids) = g.build();
        let seed = ids[pick.index(ids.len())];

        let closure = DependencyClosureBuilder::new(&project, &project).build(seed);

        prop_assert!(closure.contains(seed));
    }

    /// PROPERTY: The closure is closed under dependency and parent edges.
    ///
    /// Parent cycles must terminate, which this also exercises.
    #[test]
    fn property_closure_is_closed(g in graph(), pick in any::<prop::sample::Index>()) {
        let (project, ids) = g.build();
        let seed = ids[pick.index(ids.len())];

        let closure = DependencyClosureBuilder::new(&project, &project).build(seed);

        for member in closure.iter() {
            let module = project
                .modules()
                .iter()
                .find(|m| m.id() == member)
                .expect("closure members are registered");
            for dep in module.dependencies() {
                prop_assert!(closure.contains(*dep), "{} -> {} escapes", member, dep);
            }
            if let Some(parent) = project.parent_module(member) {
                prop_assert!(closure.contains(parent), "parent of {} escapes", member);
            }
        }
    }

    /// PROPERTY: Every closure member is reachable from the seed.
    #[test]
    fn property_closure_is_minimal(g in graph(), pick in any::<prop::sample::Index>()) {
        let (project, ids) = g.build();
        let seed_index = pick.index(ids.len());
        let seed = ids[seed_index];

        let closure = DependencyClosureBuilder::new(&project, &project).build(seed);

        let mut reachable = vec![false; g.size];
        reachable[seed_index] = true;
        let mut changed = true;
        while changed {
            changed = false;
            for i in 0..g.size {
                if !reachable[i] {
                    continue;
                }
                let targets = g
                    .edges
                    .iter()
                    .filter(|(from, _)| *from == i)
                    .map(|(_, to)| *to)
                    .chain(g.parents[i]);
                for t in targets {
                    if !reachable[t] {
                        reachable[t] = true;
                        changed = true;
                    }
                }
            }
        }

        for (i, id) in ids.iter().enumerate() {
            prop_assert_eq!(closure.contains(*id), reachable[i], "module m{}", i);
        }
    }
}
