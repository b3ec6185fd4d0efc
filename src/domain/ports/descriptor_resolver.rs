//! DescriptorResolver port
//!
//! Lookups over build descriptors. Every step can come up empty: a module
//! may be unmanaged, a descriptor may have no parent, a parent id may be
//! unknown, and a known descriptor may have no module in this project.

use crate::domain::entities::{DescriptorId, ModuleId, ProjectDescriptor};

pub trait DescriptorResolver {
    /// Descriptor of a managed module
    fn descriptor_of(&self, module: ModuleId) -> Option<&ProjectDescriptor>;

    /// Descriptor registered under `id`
    fn resolve(&self, id: &DescriptorId) -> Option<&ProjectDescriptor>;

    /// Module that owns `descriptor`, if it belongs to this project
    fn owning_module(&self, descriptor: &ProjectDescriptor) -> Option<ModuleId>;

    /// Module owning the parent descriptor of `module`
    fn parent_module(&self, module: ModuleId) -> Option<ModuleId> {
        let descriptor = self.descriptor_of(module)?;
        let parent_id = descriptor.parent()?;
        let parent = self.resolve(parent_id)?;
        self.owning_module(parent)
    }
}
