//! Background prune runs

use std::thread::{self, JoinHandle};

use crate::domain::ports::{
    DescriptorResolver, DispatchError, FileSystem, ModuleRegistry, MutationExecutor, StepDelay,
};
use crate::error::{PruneError, PruneResult};

use super::options::PruneOptions;
use super::result::PruneReport;
use super::use_case::PruneUseCase;

/// A prune run on its own worker thread
pub struct PruneTask {
    handle: JoinHandle<PruneResult<PruneReport>>,
}

impl PruneTask {
    /// Start `use_case` on a worker named `modtrim-worker`
    pub fn spawn<S, E, FS, P>(
        use_case: PruneUseCase<S, E, FS, P>,
        options: PruneOptions,
    ) -> PruneResult<Self>
    where
        S: ModuleRegistry + DescriptorResolver + Send + 'static,
        E: MutationExecutor<S> + 'static,
        FS: FileSystem + 'static,
        P: StepDelay + 'static,
    {
        let handle = thread::Builder::new()
            .name("modtrim-worker".to_string())
            .spawn(move || use_case.execute(&options))?;
        Ok(Self { handle })
    }

    /// Wait for the run to end
    pub fn join(self) -> PruneResult<PruneReport> {
        self.handle.join().unwrap_or_else(|_| {
            tracing::error!("prune worker panicked");
            Err(PruneError::Dispatch(DispatchError::Panicked))
        })
    }
}
