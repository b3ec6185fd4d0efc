//! Prune Use Case
//!
//! Shrinks a project down to what one module needs to build.
//!
//! This module handles:
//! - Computing the target's dependency closure and the removal plan
//! - Deleting each disposed module's files bottom-up, then unregistering it
//! - Removing test roots of the modules that stay
//! - Running the whole sequence off the caller's thread

mod deleter;
#[cfg(test)]
mod memory_fs;
mod options;
mod result;
mod task;
mod use_case;

pub use deleter::{FileTreeDeleter, ModuleFileIndex, TreeDeletion, MAX_DELETE_PASSES};
pub use options::PruneOptions;
pub use result::{DisposedModule, PruneReport, PruneStage};
pub use task::PruneTask;
pub use use_case::PruneUseCase;
