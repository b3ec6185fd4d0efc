//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use modtrim::presentation::factory;
//!
//! let wiring = factory::create_prune_use_case(model, &config, events)?;
//! let report = wiring.use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands};
pub use factory::{create_plan_use_case, create_prune_use_case, PruneWiring};
