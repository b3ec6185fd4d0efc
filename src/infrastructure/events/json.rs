//! JSON Event Sink
//!
//! Outputs removal events as NDJSON for CI/automation consumption.

use crate::domain::ports::{RemovalEvent, RemovalEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RemovalEventSink for JsonEventSink {
    fn on_event(&self, event: RemovalEvent) {
        let json = match event {
            RemovalEvent::Planned {
                target,
                keep_count,
                dispose_count,
                test_root_count,
            } => {
                serde_json::json!({
                    "event": "planned",
                    "command": "prune",
                    "target": target,
                    "keep": keep_count,
                    "dispose": dispose_count,
                    "test_roots": test_root_count,
                })
            }

            RemovalEvent::StepStarted {
                index,
                total,
                label,
            } => {
                serde_json::json!({
                    "event": "step_start",
                    "command": "prune",
                    "index": index,
                    "total": total,
                    "label": label,
                })
            }

            RemovalEvent::Progress { fraction } => {
                serde_json::json!({
                    "event": "progress",
                    "command": "prune",
                    "fraction": fraction,
                })
            }

            RemovalEvent::FileDeleted { path } => {
                serde_json::json!({
                    "event": "item_deleted",
                    "command": "prune",
                    "path": path.display().to_string(),
                })
            }

            RemovalEvent::FileSkipped { path } => {
                serde_json::json!({
                    "event": "item_skipped",
                    "command": "prune",
                    "path": path.display().to_string(),
                    "reason": "workspace",
                })
            }

            RemovalEvent::FileError { path, error } => {
                serde_json::json!({
                    "event": "item_error",
                    "command": "prune",
                    "path": path.display().to_string(),
                    "error": error,
                })
            }

            RemovalEvent::ModuleDisposed {
                name,
                files_deleted,
                residue,
            } => {
                serde_json::json!({
                    "event": "module_disposed",
                    "command": "prune",
                    "module": name,
                    "deleted": files_deleted,
                    "residue": residue,
                })
            }

            RemovalEvent::TestRootDeleted { path } => {
                serde_json::json!({
                    "event": "test_root_deleted",
                    "command": "prune",
                    "path": path.display().to_string(),
                })
            }

            RemovalEvent::Cancelled { completed, total } => {
                serde_json::json!({
                    "event": "cancelled",
                    "command": "prune",
                    "completed": completed,
                    "total": total,
                })
            }

            RemovalEvent::Completed {
                modules_disposed,
                test_roots_deleted,
                files_deleted,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "prune",
                    "status": "success",
                    "modules_disposed": modules_disposed,
                    "test_roots_deleted": test_roots_deleted,
                    "deleted": files_deleted,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
