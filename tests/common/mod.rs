//! Common test utilities for modtrim CLI tests.
//!
//! - `TestEnv`: isolated project and home directories plus a binary runner
//! - `fixtures`: reusable manifests

pub mod env;
pub mod fixtures;

pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
