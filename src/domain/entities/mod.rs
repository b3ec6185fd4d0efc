//! Domain Entities
//!
//! - `Module` - A registered build unit (identity by `ModuleId`)
//! - `ProjectDescriptor` - Build metadata carrying the parent edge
//! - `ProjectModel` - The live module set and descriptors
//! - `RemovalPlan` - What a prune run keeps and disposes

mod descriptor;
mod module;
mod plan;
mod project;

pub use descriptor::{DescriptorId, ProjectDescriptor};
pub use module::{Module, ModuleId};
pub use plan::RemovalPlan;
pub use project::ProjectModel;
