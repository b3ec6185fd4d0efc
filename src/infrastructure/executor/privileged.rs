//! Privileged mutation thread
//!
//! A single thread owns the state; callers send it boxed tasks and block on a
//! reply channel. Tasks therefore run one at a time, in submission order.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use crate::domain::ports::{DispatchError, MutationExecutor};

use super::CancellationToken;

type Job<S> = Box<dyn FnOnce(&mut S) + Send>;

pub const MUTATION_THREAD_NAME: &str = "modtrim-mutations";

/// Owns `S` on a dedicated thread and runs hand-offs there
pub struct PrivilegedThread<S: Send + 'static> {
    sender: Option<Sender<Job<S>>>,
    handle: Option<JoinHandle<S>>,
    token: CancellationToken,
}

impl<S: Send + 'static> PrivilegedThread<S> {
    pub fn spawn(state: S) -> io::Result<Self> {
        Self::with_token(state, CancellationToken::new())
    }

    pub fn with_token(state: S, token: CancellationToken) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel::<Job<S>>();
        let handle = thread::Builder::new()
            .name(MUTATION_THREAD_NAME.to_string())
            .spawn(move || {
                let mut state = state;
                for job in receiver {
                    job(&mut state);
                }
                tracing::debug!("mutation thread stopped");
                state
            })?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
            token,
        })
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Stop the thread once queued work is done and hand the state back
    pub fn shutdown(mut self) -> Result<S, DispatchError> {
        self.sender.take();
        let handle = self.handle.take().ok_or(DispatchError::Disconnected)?;
        handle.join().map_err(|_| DispatchError::Panicked)
    }
}

impl<S: Send + 'static> MutationExecutor<S> for PrivilegedThread<S> {
    fn dispatch<R, F>(&self, task: F, cancellable: bool) -> Result<R, DispatchError>
    where
        F: FnOnce(&mut S) -> R + Send + 'static,
        R: Send + 'static,
    {
        if cancellable && self.token.is_cancelled() {
            return Err(DispatchError::Cancelled);
        }

        let sender = self.sender.as_ref().ok_or(DispatchError::Disconnected)?;
        let (reply, outcome) = mpsc::sync_channel(1);
        let job: Job<S> = Box::new(move |state: &mut S| {
            let result = panic::catch_unwind(AssertUnwindSafe(|| task(state)));
            let _ = reply.send(result);
        });
        sender.send(job).map_err(|_| DispatchError::Disconnected)?;

        match outcome.recv() {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(_)) => {
                tracing::error!("task panicked on the mutation thread");
                Err(DispatchError::Panicked)
            }
            Err(_) => Err(DispatchError::Disconnected),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl<S: Send + 'static> Drop for PrivilegedThread<S> {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
