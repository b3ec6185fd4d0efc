//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod module_set;

pub use module_set::ModuleSet;
