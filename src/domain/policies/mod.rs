//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain entities.

mod workspace_files;

pub use workspace_files::{WorkspaceFilePolicy, DEFAULT_DESCRIPTOR_EXTENSION};
