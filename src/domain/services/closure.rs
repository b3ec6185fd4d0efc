//! Dependency closure
//!
//! Computes the modules a target needs to stay buildable: everything
//! reachable over declared dependency edges and descriptor parent edges.

use std::collections::{HashMap, VecDeque};

use crate::domain::entities::{Module, ModuleId};
use crate::domain::ports::{DescriptorResolver, ModuleRegistry};
use crate::domain::value_objects::ModuleSet;

/// Breadth-first closure over dependency and parent edges.
///
/// Each module is enqueued at most once (only when newly inserted into the
/// result), so parent cycles terminate without extra bookkeeping.
pub struct DependencyClosureBuilder<'a, R, D>
where
    R: ModuleRegistry,
    D: DescriptorResolver,
{
    registry: &'a R,
    descriptors: &'a D,
}

impl<'a, R, D> DependencyClosureBuilder<'a, R, D>
where
    R: ModuleRegistry,
    D: DescriptorResolver,
{
    pub fn new(registry: &'a R, descriptors: &'a D) -> Self {
        Self {
            registry,
            descriptors,
        }
    }

    /// Closure of `seed`. Always contains `seed` itself.
    pub fn build(&self, seed: ModuleId) -> ModuleSet {
        let index: HashMap<ModuleId, &Module> = self
            .registry
            .modules()
            .iter()
            .map(|m| (m.id(), m))
            .collect();

        let mut closure = ModuleSet::new();
        closure.insert(seed);
        if let Some(module) = index.get(&seed) {
            for dep in module.dependencies() {
                if index.contains_key(dep) {
                    closure.insert(*dep);
                }
            }
        }

        let mut queue: VecDeque<ModuleId> = closure.iter().collect();
        while let Some(current) = queue.pop_front() {
            if let Some(module) = index.get(&current) {
                for dep in module.dependencies() {
                    if index.contains_key(dep) && closure.insert(*dep) {
                        tracing::trace!(from = %module.name(), to = %dep, "dependency edge");
                        queue.push_back(*dep);
                    }
                }
            }

            let Some(parent) = self.descriptors.parent_module(current) else {
                continue;
            };
            if closure.insert(parent) {
                tracing::trace!(child = %current, parent = %parent, "parent edge");
                queue.push_back(parent);
            }
        }

        tracing::debug!(seed = %seed, size = closure.len(), "dependency closure computed");
        closure
    }
}
