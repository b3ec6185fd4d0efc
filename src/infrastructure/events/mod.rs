//! Event Sink Implementations
//!
//! Provides concrete implementations of RemovalEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - the console sink lives in `ui::views::progress`

mod json;

pub use json::JsonEventSink;
