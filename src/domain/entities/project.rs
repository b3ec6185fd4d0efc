//! Project model entity
//!
//! The live module set plus the descriptors that carry parent edges.
//! Infrastructure loads it from the manifest; tests build it directly.

use std::path::{Path, PathBuf};

use crate::domain::ports::{DescriptorResolver, ModuleRegistry, RegistryError};

use super::{DescriptorId, Module, ModuleId, ProjectDescriptor};

#[derive(Debug, Clone)]
struct DescriptorEntry {
    descriptor: ProjectDescriptor,
    owner: Option<ModuleId>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectModel {
    root: PathBuf,
    modules: Vec<Module>,
    descriptors: Vec<DescriptorEntry>,
    next_id: u32,
}

impl ProjectModel {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Directory all relative manifest paths are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Register a module and return its identity
    pub fn add_module(
        &mut self,
        name: impl Into<String>,
        content_roots: Vec<PathBuf>,
        test_roots: Vec<PathBuf>,
    ) -> ModuleId {
        let id = ModuleId::new(self.next_id);
        self.next_id += 1;
        self.modules.push(
            Module::new(id, name)
                .with_content_roots(content_roots)
                .with_test_roots(test_roots),
        );
        id
    }

    /// Declare that `from` needs `to`. Unknown modules are ignored.
    pub fn add_dependency(&mut self, from: ModuleId, to: ModuleId) {
        if self.module(to).is_none() {
            return;
        }
        if let Some(module) = self.modules.iter_mut().find(|m| m.id() == from) {
            module.add_dependency(to);
        }
    }

    /// Attach a descriptor to a module, replacing any previous one
    pub fn set_descriptor(&mut self, module: ModuleId, descriptor: ProjectDescriptor) {
        self.descriptors.retain(|e| e.owner != Some(module));
        self.descriptors.push(DescriptorEntry {
            descriptor,
            owner: Some(module),
        });
    }

    /// Register a descriptor that no module in this project owns
    pub fn add_external_descriptor(&mut self, descriptor: ProjectDescriptor) {
        self.descriptors.push(DescriptorEntry {
            descriptor,
            owner: None,
        });
    }

    /// Drop a module, its outgoing dependency edges and every edge pointing at it.
    ///
    /// Its descriptor stays resolvable but no longer has an owner.
    pub fn remove_module(&mut self, id: ModuleId) -> Option<Module> {
        let index = self.modules.iter().position(|m| m.id() == id)?;
        let removed = self.modules.remove(index);
        for module in &mut self.modules {
            module.retain_dependencies(|dep| dep != id);
        }
        for entry in &mut self.descriptors {
            if entry.owner == Some(id) {
                entry.owner = None;
            }
        }
        Some(removed)
    }
}

impl ModuleRegistry for ProjectModel {
    fn modules(&self) -> &[Module] {
        &self.modules
    }

    fn unregister(&mut self, id: ModuleId) -> Result<(), RegistryError> {
        self.remove_module(id)
            .map(|_| ())
            .ok_or(RegistryError::UnknownModule { id })
    }
}

impl DescriptorResolver for ProjectModel {
    fn descriptor_of(&self, module: ModuleId) -> Option<&ProjectDescriptor> {
        self.descriptors
            .iter()
            .find(|e| e.owner == Some(module))
            .map(|e| &e.descriptor)
    }

    fn resolve(&self, id: &DescriptorId) -> Option<&ProjectDescriptor> {
        self.descriptors
            .iter()
            .find(|e| e.descriptor.id() == id)
            .map(|e| &e.descriptor)
    }

    fn owning_module(&self, descriptor: &ProjectDescriptor) -> Option<ModuleId> {
        self.descriptors
            .iter()
            .find(|e| e.descriptor.id() == descriptor.id())
            .and_then(|e| e.owner)
    }
}
