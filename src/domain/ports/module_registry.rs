//! ModuleRegistry port
//!
//! The project's module set. The core reads modules through this port and
//! disposes them through `unregister`; it never constructs modules itself.

use crate::domain::entities::{Module, ModuleId};

pub trait ModuleRegistry {
    /// All registered modules in enumeration order
    fn modules(&self) -> &[Module];

    fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules().iter().find(|m| m.id() == id)
    }

    /// First module registered under `name`
    fn find_by_name(&self, name: &str) -> Option<&Module> {
        self.modules().iter().find(|m| m.name() == name)
    }

    /// Remove a module from the registry
    ///
    /// Implementations must leave the persisted model consistent with the
    /// in-memory one once this returns.
    fn unregister(&mut self, id: ModuleId) -> Result<(), RegistryError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("module {id} is not registered")]
    UnknownModule { id: ModuleId },

    #[error("Failed to access project model: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize project model: {message}")]
    SerializationError { message: String },
}
