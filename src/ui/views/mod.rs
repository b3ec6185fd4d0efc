pub mod plan;
pub mod progress;
pub mod prune;
