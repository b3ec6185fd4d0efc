//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod project_manifest;

pub use project_manifest::{TomlProjectModel, MANIFEST_FILE, MANIFEST_LOCK_FILE};
