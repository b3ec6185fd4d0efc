//! Logging setup
//!
//! Structured logs go to stderr through `tracing-subscriber`. The level comes
//! from the configured verbosity, raised by each `-v`; `MODTRIM_LOG` (or
//! `RUST_LOG`) replaces the whole filter when set.

use is_terminal::IsTerminal;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

pub const LOG_ENV: &str = "MODTRIM_LOG";

/// Default level for a verbosity setting and a `-v` count
pub fn level_for(verbosity: Verbosity, verbose: u8) -> LevelFilter {
    let base: u8 = match verbosity {
        Verbosity::Quiet => 0,
        Verbosity::Normal => 1,
        Verbosity::Verbose => 2,
        Verbosity::Debug => 3,
    };
    match base.saturating_add(verbose) {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the filter; `lookup` reads environment variables
pub fn build_env_filter(
    default: LevelFilter,
    lookup: impl Fn(&str) -> Option<String>,
) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(default.into());
    match lookup(LOG_ENV).or_else(|| lookup("RUST_LOG")) {
        Some(directives) => builder.parse_lossy(directives),
        None => builder.parse_lossy(""),
    }
}

/// Install the global subscriber
pub fn init(verbosity: Verbosity, verbose: u8) -> Result<(), TryInitError> {
    let filter = build_env_filter(level_for(verbosity, verbose), |key| std::env::var(key).ok());
    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
}
