//! modtrim - shrink a multi-module project to one module's needs
//!
//! Given a target module, modtrim keeps the modules it reaches through
//! dependency and parent-descriptor edges, deletes every other module from
//! disk and from the project manifest, and strips test sources from the
//! modules that stay (the target keeps its own).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{PruneOptions, PruneReport, PruneStage, PruneTask, PruneUseCase};
pub use config::Config;
pub use domain::entities::{Module, ModuleId, ProjectModel, RemovalPlan};
pub use domain::services::{DependencyClosureBuilder, RemovalPlanner};
pub use domain::value_objects::ModuleSet;
pub use error::{PruneError, PruneResult};
