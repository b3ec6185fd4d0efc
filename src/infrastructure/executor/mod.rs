//! Mutation executors
//!
//! Implementations of the `MutationExecutor` port:
//! - `PrivilegedThread`: a dedicated thread owns the project model
//! - `InlineExecutor`: runs hand-offs on the caller's thread behind a lock

mod inline;
mod privileged;
mod token;

pub use inline::InlineExecutor;
pub use privileged::PrivilegedThread;
pub use token::CancellationToken;
