//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PruneUseCase` - Plan and run the removal of everything a module does not need
//! - `PruneTask` - Run a prune on a worker thread

pub mod prune;

pub use prune::{
    DisposedModule, FileTreeDeleter, ModuleFileIndex, PruneOptions, PruneReport, PruneStage,
    PruneTask, PruneUseCase, TreeDeletion, MAX_DELETE_PASSES,
};
