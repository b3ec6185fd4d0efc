//! Module entity
//!
//! A module is a build unit owned by the registry. The core only ever sees
//! snapshots of modules; identity lives in [`ModuleId`], never in the name.

use std::path::PathBuf;

/// Identity of a registered module.
///
/// Assigned by the registry when the project model is loaded and never reused,
/// so two modules sharing a name remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(u32);

impl ModuleId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only snapshot of a registered module
#[derive(Debug, Clone)]
pub struct Module {
    id: ModuleId,
    name: String,
    content_roots: Vec<PathBuf>,
    test_roots: Vec<PathBuf>,
    dependencies: Vec<ModuleId>,
}

impl Module {
    pub fn new(id: ModuleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            content_roots: Vec::new(),
            test_roots: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_content_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.content_roots = roots;
        self
    }

    pub fn with_test_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.test_roots = roots;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<ModuleId>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory trees owned by this module
    pub fn content_roots(&self) -> &[PathBuf] {
        &self.content_roots
    }

    /// Source roots holding test-only sources, in declaration order
    pub fn test_roots(&self) -> &[PathBuf] {
        &self.test_roots
    }

    /// Modules this module declares it needs (direct edges only)
    pub fn dependencies(&self) -> &[ModuleId] {
        &self.dependencies
    }

    pub(crate) fn add_dependency(&mut self, id: ModuleId) {
        if !self.dependencies.contains(&id) {
            self.dependencies.push(id);
        }
    }

    pub(crate) fn retain_dependencies(&mut self, keep: impl Fn(ModuleId) -> bool) {
        self.dependencies.retain(|id| keep(*id));
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Module {}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
