//! Removal Event Port
//!
//! Provides an observable interface for prune runs.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during a prune run
#[derive(Debug, Clone, PartialEq)]
pub enum RemovalEvent {
    /// Plan computed, nothing touched yet
    Planned {
        target: String,
        keep_count: usize,
        dispose_count: usize,
        test_root_count: usize,
    },

    /// A step is about to run (`label` is a module name or a path)
    StepStarted {
        index: usize,
        total: usize,
        label: String,
    },

    /// Fraction of steps completed, in `0.0..=1.0`
    Progress { fraction: f64 },

    /// A file or empty directory was deleted
    FileDeleted { path: PathBuf },

    /// A workspace file was left in place
    FileSkipped { path: PathBuf },

    /// Deleting a file failed; it stays
    FileError { path: PathBuf, error: String },

    /// A module was unregistered after its files were processed
    ModuleDisposed {
        name: String,
        files_deleted: usize,
        residue: bool,
    },

    /// A test source root was removed
    TestRootDeleted { path: PathBuf },

    /// Cancellation stopped the run early
    Cancelled { completed: usize, total: usize },

    /// Run completed
    Completed {
        modules_disposed: usize,
        test_roots_deleted: usize,
        files_deleted: usize,
    },
}

/// Trait for receiving removal events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait RemovalEventSink: Send + Sync {
    /// Handle a removal event
    fn on_event(&self, event: RemovalEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RemovalEventSink for NoopEventSink {
    fn on_event(&self, _event: RemovalEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
