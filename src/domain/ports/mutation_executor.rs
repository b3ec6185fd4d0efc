//! MutationExecutor port
//!
//! Every mutation of shared project state runs on one privileged context.
//! Callers hand off a closure and block until it has run, so mutations form
//! a strict sequence with no two in flight.

/// Why a hand-off did not run
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Cancellation was requested before the task could run
    #[error("operation cancelled")]
    Cancelled,

    /// The privileged context is gone
    #[error("mutation thread is no longer running")]
    Disconnected,

    /// The task panicked on the privileged context
    #[error("mutation task panicked")]
    Panicked,
}

/// Runs tasks against the state `S` on the privileged context
pub trait MutationExecutor<S>: Send + Sync {
    /// Run `task` with exclusive access to the state and block until it returns.
    ///
    /// When `cancellable` is set, a pending cancellation request makes the
    /// hand-off fail with [`DispatchError::Cancelled`] instead of running.
    fn dispatch<R, F>(&self, task: F, cancellable: bool) -> Result<R, DispatchError>
    where
        F: FnOnce(&mut S) -> R + Send + 'static,
        R: Send + 'static;

    /// Whether cancellation has been requested
    fn is_cancelled(&self) -> bool;

    /// Hand off a task, honouring cancellation
    fn invoke_and_wait<R, F>(&self, task: F) -> Result<R, DispatchError>
    where
        F: FnOnce(&mut S) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.dispatch(task, true)
    }

    /// Hand off the tail of a step that already started; never cancelled
    fn finish_step<R, F>(&self, task: F) -> Result<R, DispatchError>
    where
        F: FnOnce(&mut S) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.dispatch(task, false)
    }
}
