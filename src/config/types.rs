//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::policies::{WorkspaceFilePolicy, DEFAULT_DESCRIPTOR_EXTENSION};
use crate::error::PruneResult;

use super::loader::{self, ConfigWarning};

/// Removal tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalConfig {
    /// Pause between removal steps, in milliseconds
    #[serde(default)]
    pub step_delay_ms: u64,

    /// Extension of module descriptor files, which are always deletable
    #[serde(default = "default_descriptor_extension")]
    pub descriptor_extension: String,
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 0,
            descriptor_extension: default_descriptor_extension(),
        }
    }
}

fn default_descriptor_extension() -> String {
    DEFAULT_DESCRIPTOR_EXTENSION.to_string()
}

/// Workspace files that pruning leaves in place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionConfig {
    #[serde(default = "default_workspace_dirs")]
    pub workspace_dirs: Vec<String>,

    #[serde(default = "default_workspace_extensions")]
    pub workspace_extensions: Vec<String>,

    #[serde(default = "default_workspace_files")]
    pub workspace_files: Vec<String>,
}

impl Default for ProtectionConfig {
    fn default() -> Self {
        Self {
            workspace_dirs: default_workspace_dirs(),
            workspace_extensions: default_workspace_extensions(),
            workspace_files: default_workspace_files(),
        }
    }
}

fn default_workspace_dirs() -> Vec<String> {
    vec![".idea".to_string(), ".modtrim".to_string()]
}

fn default_workspace_extensions() -> Vec<String> {
    vec!["ipr".to_string(), "iws".to_string(), "iml".to_string()]
}

fn default_workspace_files() -> Vec<String> {
    vec!["modtrim.toml".to_string(), "modtrim.lock".to_string()]
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub removal: RemovalConfig,

    #[serde(default)]
    pub protection: ProtectionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PruneResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PruneResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, plus env overrides
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (MODTRIM_* prefix)
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self)
    }

    /// Pause between removal steps
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.removal.step_delay_ms)
    }

    /// Protection rule built from `[protection]` and the descriptor extension
    pub fn workspace_policy(&self) -> WorkspaceFilePolicy {
        WorkspaceFilePolicy::new()
            .with_workspace_dirs(self.protection.workspace_dirs.clone())
            .with_workspace_extensions(self.protection.workspace_extensions.clone())
            .with_workspace_files(self.protection.workspace_files.clone())
            .with_descriptor_extension(self.removal.descriptor_extension.clone())
    }
}
