//! StepDelay port
//!
//! Pause between destructive steps to throttle I/O on slow storage.

/// The pause was cut short; the whole task must stop
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
#[error("step delay interrupted")]
pub struct Interrupted;

pub trait StepDelay: Send + Sync {
    fn pause(&self) -> Result<(), Interrupted>;
}

/// No pause at all
pub struct NoDelay;

impl StepDelay for NoDelay {
    fn pause(&self) -> Result<(), Interrupted> {
        Ok(())
    }
}
