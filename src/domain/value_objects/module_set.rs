//! Identity-keyed module set
//!
//! Membership is decided by [`ModuleId`] only. Insertion order is kept so
//! logs and reports are deterministic.

use std::collections::HashSet;

use crate::domain::entities::ModuleId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleSet {
    members: HashSet<ModuleId>,
    order: Vec<ModuleId>,
}

impl ModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a module, returning `true` if it was not yet a member
    pub fn insert(&mut self, id: ModuleId) -> bool {
        if self.members.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Members in insertion order
    pub fn iter(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.order.iter().copied()
    }
}

impl FromIterator<ModuleId> for ModuleSet {
    fn from_iter<I: IntoIterator<Item = ModuleId>>(iter: I) -> Self {
        let mut set = ModuleSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
