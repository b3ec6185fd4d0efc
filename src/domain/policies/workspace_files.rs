//! Workspace file policy
//!
//! Decides which nodes pruning must leave alone. Project and workspace
//! management files are protected, except module descriptor files, which go
//! with their module.

use std::path::Path;

pub const DEFAULT_DESCRIPTOR_EXTENSION: &str = "iml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFilePolicy {
    workspace_dirs: Vec<String>,
    workspace_extensions: Vec<String>,
    workspace_files: Vec<String>,
    descriptor_extension: String,
}

impl Default for WorkspaceFilePolicy {
    fn default() -> Self {
        Self {
            workspace_dirs: vec![".idea".to_string(), ".modtrim".to_string()],
            workspace_extensions: vec!["ipr".to_string(), "iws".to_string(), "iml".to_string()],
            workspace_files: vec!["modtrim.toml".to_string(), "modtrim.lock".to_string()],
            descriptor_extension: DEFAULT_DESCRIPTOR_EXTENSION.to_string(),
        }
    }
}

impl WorkspaceFilePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory names whose whole subtree is workspace metadata
    pub fn with_workspace_dirs(mut self, dirs: Vec<String>) -> Self {
        self.workspace_dirs = dirs;
        self
    }

    /// Extensions (without the dot) of workspace files
    pub fn with_workspace_extensions(mut self, extensions: Vec<String>) -> Self {
        self.workspace_extensions = extensions;
        self
    }

    /// Exact file names of workspace files
    pub fn with_workspace_files(mut self, files: Vec<String>) -> Self {
        self.workspace_files = files;
        self
    }

    /// Extension (without the dot) of module descriptor files
    pub fn with_descriptor_extension(mut self, extension: impl Into<String>) -> Self {
        self.descriptor_extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn descriptor_extension(&self) -> &str {
        &self.descriptor_extension
    }

    /// Whether `path` is project or workspace management metadata
    pub fn is_workspace_file(&self, path: &Path) -> bool {
        self.in_workspace_dir(path) || self.is_workspace_name(path)
    }

    /// Whether pruning must skip `path`
    pub fn is_protected(&self, path: &Path) -> bool {
        self.is_workspace_file(path) && !self.is_module_descriptor(path)
    }

    /// Like [`is_protected`](Self::is_protected), but workspace directories
    /// only count below `root`.
    pub fn is_protected_in(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        (self.in_workspace_dir(relative) || self.is_workspace_name(path))
            && !self.is_module_descriptor(path)
    }

    fn in_workspace_dir(&self, path: &Path) -> bool {
        path.components().any(|c| {
            c.as_os_str()
                .to_str()
                .is_some_and(|name| self.workspace_dirs.iter().any(|d| d == name))
        })
    }

    fn is_workspace_name(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if self.workspace_files.iter().any(|f| f == name) {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.workspace_extensions.iter().any(|w| w == ext))
    }

    fn is_module_descriptor(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.descriptor_extension);
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with(&suffix))
    }
}
