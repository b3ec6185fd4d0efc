//! Same-thread executor

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{DispatchError, MutationExecutor};

use super::CancellationToken;

/// Runs every hand-off on the calling thread while holding a lock on the state.
///
/// Used by `plan` and by tests, where no separate privileged context is needed.
#[derive(Debug)]
pub struct InlineExecutor<S> {
    state: Mutex<S>,
    token: CancellationToken,
}

impl<S> InlineExecutor<S> {
    pub fn new(state: S) -> Self {
        Self::with_token(state, CancellationToken::new())
    }

    pub fn with_token(state: S, token: CancellationToken) -> Self {
        Self {
            state: Mutex::new(state),
            token,
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Read the state outside of a hand-off
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.lock())
    }

    pub fn into_inner(self) -> S {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: Send> MutationExecutor<S> for InlineExecutor<S> {
    fn dispatch<R, F>(&self, task: F, cancellable: bool) -> Result<R, DispatchError>
    where
        F: FnOnce(&mut S) -> R + Send + 'static,
        R: Send + 'static,
    {
        if cancellable && self.token.is_cancelled() {
            return Err(DispatchError::Cancelled);
        }
        Ok(task(&mut self.lock()))
    }

    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
