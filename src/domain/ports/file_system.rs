//! FileSystem port - abstraction over the file operations pruning needs
//!
//! This trait allows the application layer to walk and delete module
//! content without depending on concrete implementations (local, in-memory).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened on
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - in-memory trees in tests
pub trait FileSystem: Send + Sync {
    /// Lazily enumerate `root` and everything below it in pre-order.
    ///
    /// A directory is yielded before its children. Subtrees rooted at any
    /// path in `excluded` are skipped entirely. Entries that vanish during
    /// the walk are silently dropped.
    fn content<'a>(
        &'a self,
        root: &Path,
        excluded: &'a [PathBuf],
    ) -> Box<dyn Iterator<Item = PathBuf> + 'a>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// A file, or a directory with no children
    fn is_leaf(&self, path: &Path) -> FsResult<bool>;

    /// Remove a file (or an empty directory)
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it
    fn remove_all(&self, path: &Path) -> FsResult<()>;
}
