//! Domain Layer
//!
//! The core of modtrim - closure and planning logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Module, ProjectModel, RemovalPlan)
//! - `value_objects/` - Immutable value types (ModuleSet)
//! - `services/` - Domain services (DependencyClosureBuilder, RemovalPlanner)
//! - `policies/` - Business rules (WorkspaceFilePolicy)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
