//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `repositories/` - Project manifest repository
//! - `executor/` - Mutation executors and cancellation
//! - `events/` - Event sinks
//! - `pacing` - Interruptible step delay

pub mod events;
pub mod executor;
pub mod fs;
pub mod pacing;
pub mod repositories;

// Re-export for convenience
pub use events::JsonEventSink;
pub use executor::{CancellationToken, InlineExecutor, PrivilegedThread};
pub use fs::LocalFs;
pub use pacing::{PaceInterrupter, Pacer};
pub use repositories::TomlProjectModel;
