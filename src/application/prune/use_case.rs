//! Prune Use Case
//!
//! Runs a removal plan: dispose every module outside the target's closure,
//! then strip test roots from the kept modules. Stages only move forward:
//! `Idle → ClosureComputed → Planned → DisposingModules → DeletingTestRoots → Done`.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::entities::{ModuleId, RemovalPlan};
use crate::domain::ports::{
    DescriptorResolver, DispatchError, FileSystem, ModuleRegistry, MutationExecutor,
    RemovalEvent, RemovalEventSink, StepDelay,
};
use crate::domain::services::{DependencyClosureBuilder, RemovalPlanner};
use crate::error::{PruneError, PruneResult};

use super::deleter::{FileTreeDeleter, ModuleFileIndex};
use super::options::PruneOptions;
use super::result::{DisposedModule, PruneReport, PruneStage};

/// Prune use case - shrinks the project to one module's closure
pub struct PruneUseCase<S, E, FS, P>
where
    S: ModuleRegistry + DescriptorResolver + Send + 'static,
    E: MutationExecutor<S>,
    FS: FileSystem + 'static,
    P: StepDelay,
{
    executor: E,
    deleter: Arc<FileTreeDeleter<FS>>,
    delay: P,
    events: Arc<dyn RemovalEventSink>,
    _state: PhantomData<fn() -> S>,
}

impl<S, E, FS, P> PruneUseCase<S, E, FS, P>
where
    S: ModuleRegistry + DescriptorResolver + Send + 'static,
    E: MutationExecutor<S>,
    FS: FileSystem + 'static,
    P: StepDelay,
{
    pub fn new(
        executor: E,
        deleter: FileTreeDeleter<FS>,
        delay: P,
        events: Arc<dyn RemovalEventSink>,
    ) -> Self {
        Self {
            executor,
            deleter: Arc::new(deleter),
            delay,
            events,
            _state: PhantomData,
        }
    }

    /// Compute the plan for `target` without touching anything
    pub fn plan(&self, target: &str) -> PruneResult<Option<RemovalPlan>> {
        let target = target.to_string();
        Ok(self.executor.invoke_and_wait(move |model: &mut S| plan_for(model, &target))?)
    }

    /// Execute the whole run.
    ///
    /// File failures never abort the run. An interrupted step delay, a failed
    /// unregistration or a dead mutation thread do, leaving whatever was
    /// already removed in place.
    pub fn execute(&self, options: &PruneOptions) -> PruneResult<PruneReport> {
        let mut report = PruneReport::new();

        let target = options.target.clone();
        let planned = self
            .executor
            .invoke_and_wait(move |model: &mut S| plan_for(model, &target));
        let Some(planned) = accept(planned)? else {
            return Ok(self.cancelled(report, 0, 0));
        };
        let Some(plan) = planned else {
            tracing::info!(target = %options.target, "no such module, nothing to do");
            return Ok(report);
        };
        report.stage = PruneStage::ClosureComputed;

        let names: Vec<&str> = plan.dispose().iter().map(|m| m.name()).collect();
        tracing::info!(modules = ?names, "should dispose modules");
        self.events.on_event(RemovalEvent::Planned {
            target: options.target.clone(),
            keep_count: plan.closure().len(),
            dispose_count: plan.dispose().len(),
            test_root_count: plan.test_roots().len(),
        });
        report.plan = Some(plan.clone());
        report.stage = PruneStage::Planned;

        if options.dry_run {
            return Ok(report);
        }

        let total = plan.step_count();
        let mut completed = 0;

        report.stage = PruneStage::DisposingModules;
        for module in plan.dispose() {
            if self.executor.is_cancelled() {
                return Ok(self.cancelled(report, completed, total));
            }
            self.step_started(completed, total, module.name().to_string());

            let id = module.id();
            let deleter = Arc::clone(&self.deleter);
            let deletion = self.executor.invoke_and_wait(move |model: &mut S| {
                let index = ModuleFileIndex::for_module(id, model.modules());
                deleter.delete_tree(&index)
            });
            let Some(deletion) = accept(deletion)? else {
                return Ok(self.cancelled(report, completed, total));
            };

            self.delay.pause()?;
            self.unregister(id)?;

            tracing::info!(
                module = %module.name(),
                files = deletion.files_deleted,
                passes = deletion.passes,
                "disposed module"
            );
            if deletion.may_leave_residue() {
                tracing::warn!(module = %module.name(), "module unregistered with files left on disk");
            }
            self.events.on_event(RemovalEvent::ModuleDisposed {
                name: module.name().to_string(),
                files_deleted: deletion.files_deleted,
                residue: deletion.may_leave_residue(),
            });
            report.disposed.push(DisposedModule {
                name: module.name().to_string(),
                deletion,
            });

            completed += 1;
            self.progress(completed, total);
        }

        report.stage = PruneStage::DeletingTestRoots;
        for root in plan.test_roots() {
            if self.executor.is_cancelled() {
                return Ok(self.cancelled(report, completed, total));
            }
            self.step_started(completed, total, root.display().to_string());

            let deleter = Arc::clone(&self.deleter);
            let path = root.clone();
            let removed = self
                .executor
                .invoke_and_wait(move |model: &mut S| {
                    deleter.delete_directory(&path, model.modules())
                });
            let Some(removed) = accept(removed)? else {
                return Ok(self.cancelled(report, completed, total));
            };

            if removed {
                self.events.on_event(RemovalEvent::TestRootDeleted { path: root.clone() });
                report.test_roots_deleted.push(root.clone());
            } else {
                report.test_roots_failed.push(root.clone());
            }

            self.delay.pause()?;

            completed += 1;
            self.progress(completed, total);
        }

        report.stage = PruneStage::Done;
        self.events.on_event(RemovalEvent::Completed {
            modules_disposed: report.disposed.len(),
            test_roots_deleted: report.test_roots_deleted.len(),
            files_deleted: report.files_deleted(),
        });
        Ok(report)
    }

    fn unregister(&self, id: ModuleId) -> PruneResult<()> {
        // Not cancellable: the module's files are already gone.
        self.executor
            .finish_step(move |model: &mut S| model.unregister(id))??;
        Ok(())
    }

    fn step_started(&self, index: usize, total: usize, label: String) {
        tracing::debug!(step = index + 1, total, "removing {}", label);
        self.events
            .on_event(RemovalEvent::StepStarted { index, total, label });
    }

    fn progress(&self, completed: usize, total: usize) {
        let fraction = completed as f64 / total as f64;
        self.events.on_event(RemovalEvent::Progress { fraction });
    }

    fn cancelled(&self, mut report: PruneReport, completed: usize, total: usize) -> PruneReport {
        tracing::info!(completed, total, "prune cancelled");
        report.cancelled = true;
        self.events
            .on_event(RemovalEvent::Cancelled { completed, total });
        report
    }
}

/// Closure and plan for the module named `target`, computed against one
/// consistent view of the model.
fn plan_for<S>(model: &S, target: &str) -> Option<RemovalPlan>
where
    S: ModuleRegistry + DescriptorResolver,
{
    let seed = model.find_by_name(target)?.id();
    let same_name = model
        .modules()
        .iter()
        .filter(|m| m.name() == target)
        .count();
    if same_name > 1 {
        tracing::warn!(target, count = same_name, "several modules share this name, using the first");
    }

    let closure = DependencyClosureBuilder::new(model, model).build(seed);
    Some(RemovalPlanner::plan(model.modules(), closure, seed))
}

/// `Ok(None)` when the hand-off was cancelled
fn accept<T>(result: Result<T, DispatchError>) -> PruneResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DispatchError::Cancelled) => Ok(None),
        Err(e) => Err(PruneError::Dispatch(e)),
    }
}
