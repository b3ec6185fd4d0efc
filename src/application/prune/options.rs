//! Prune options

/// Options for a prune run
#[derive(Debug, Clone, Default)]
pub struct PruneOptions {
    /// Name of the module to keep buildable
    pub target: String,
    /// Stop after planning (no actual deletion)
    pub dry_run: bool,
}

impl PruneOptions {
    /// Create new prune options for `target`
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
