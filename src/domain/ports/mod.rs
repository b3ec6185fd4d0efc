//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod descriptor_resolver;
pub mod file_system;
pub mod module_registry;
pub mod mutation_executor;
pub mod removal_events;
pub mod step_delay;

pub use descriptor_resolver::DescriptorResolver;
pub use file_system::{FileSystem, FsError, FsResult};
pub use module_registry::{ModuleRegistry, RegistryError};
pub use mutation_executor::{DispatchError, MutationExecutor};
pub use removal_events::{NoopEventSink, RemovalEvent, RemovalEventSink};
pub use step_delay::{Interrupted, NoDelay, StepDelay};
