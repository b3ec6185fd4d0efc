//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::io;
use std::sync::Arc;

use crate::application::{FileTreeDeleter, PruneUseCase};
use crate::config::Config;
use crate::domain::ports::{NoDelay, NoopEventSink, RemovalEventSink};
use crate::infrastructure::{
    CancellationToken, InlineExecutor, LocalFs, PaceInterrupter, Pacer, PrivilegedThread,
    TomlProjectModel,
};

/// Prune use case that mutates the project on a privileged thread
pub type ConcretePruneUseCase =
    PruneUseCase<TomlProjectModel, PrivilegedThread<TomlProjectModel>, LocalFs, Pacer>;

/// Read-only use case for `plan`
pub type PlanUseCase =
    PruneUseCase<TomlProjectModel, InlineExecutor<TomlProjectModel>, LocalFs, NoDelay>;

/// A prune use case plus the handles that stop it
pub struct PruneWiring {
    pub use_case: ConcretePruneUseCase,
    /// Stops the run before its next step
    pub token: CancellationToken,
    /// Cuts a pending step delay short, which aborts the run
    pub interrupter: PaceInterrupter,
}

/// Create a prune use case with all dependencies wired up
pub fn create_prune_use_case(
    model: TomlProjectModel,
    config: &Config,
    events: Arc<dyn RemovalEventSink>,
) -> io::Result<PruneWiring> {
    let token = CancellationToken::new();
    let executor = PrivilegedThread::with_token(model, token.clone())?;
    let deleter = FileTreeDeleter::new(LocalFs::new(), config.workspace_policy(), events.clone());
    let pacer = Pacer::new(config.step_delay());
    let interrupter = pacer.interrupter();

    Ok(PruneWiring {
        use_case: PruneUseCase::new(executor, deleter, pacer, events),
        token,
        interrupter,
    })
}

/// Create a use case that can only plan
pub fn create_plan_use_case(model: TomlProjectModel, config: &Config) -> PlanUseCase {
    let events: Arc<dyn RemovalEventSink> = Arc::new(NoopEventSink);
    let deleter = FileTreeDeleter::new(LocalFs::new(), config.workspace_policy(), events.clone());
    PruneUseCase::new(InlineExecutor::new(model), deleter, NoDelay, events)
}
