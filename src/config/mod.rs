//! Configuration module for modtrim
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MODTRIM_*)
//! 3. Project config (.modtrim/config.toml)
//! 4. User config (~/.config/modtrim/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, DESCRIPTOR_EXTENSION_ENV, STEP_DELAY_ENV, VERBOSITY_ENV};
pub use types::{Config, OutputConfig, ProtectionConfig, RemovalConfig, Verbosity};
