//! Error types for modtrim
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{DispatchError, Interrupted, RegistryError};

/// Result type alias for modtrim operations
pub type PruneResult<T> = Result<T, PruneError>;

/// Main error type for modtrim operations
#[derive(Error, Debug)]
pub enum PruneError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Project manifest missing or malformed
    #[error("invalid project manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// Unregistering a module failed
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The mutation thread could not run a task
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The pause between steps was interrupted
    #[error("interrupted while waiting between removal steps")]
    InterruptedWait,
}

impl From<Interrupted> for PruneError {
    fn from(_: Interrupted) -> Self {
        PruneError::InterruptedWait
    }
}
