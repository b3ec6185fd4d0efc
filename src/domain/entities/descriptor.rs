//! Project descriptor entity
//!
//! Hierarchical build metadata: a descriptor names itself and, optionally,
//! the descriptor it inherits from. Parent edges are independent of
//! dependency edges.

use serde::{Deserialize, Serialize};

/// Opaque descriptor identifier (e.g. `com.acme:parent`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorId(String);

impl DescriptorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DescriptorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    id: DescriptorId,
    parent: Option<DescriptorId>,
}

impl ProjectDescriptor {
    pub fn new(id: DescriptorId) -> Self {
        Self { id, parent: None }
    }

    pub fn with_parent(mut self, parent: Option<DescriptorId>) -> Self {
        self.parent = parent;
        self
    }

    pub fn id(&self) -> &DescriptorId {
        &self.id
    }

    pub fn parent(&self) -> Option<&DescriptorId> {
        self.parent.as_ref()
    }
}
