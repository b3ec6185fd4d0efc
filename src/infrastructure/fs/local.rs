//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Symbolic links are never followed: a link is a leaf and removing it
/// removes the link only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Lazy pre-order walk over one root
struct ContentWalker<'a> {
    stack: Vec<PathBuf>,
    excluded: &'a [PathBuf],
}

impl ContentWalker<'_> {
    fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.iter().any(|e| path.starts_with(e))
    }
}

impl Iterator for ContentWalker<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        while let Some(path) = self.stack.pop() {
            let Ok(meta) = fs::symlink_metadata(&path) else {
                // gone since it was listed
                continue;
            };

            if meta.is_dir() {
                match fs::read_dir(&path) {
                    Ok(entries) => {
                        let mut children: Vec<PathBuf> = entries
                            .filter_map(|e| e.ok().map(|e| e.path()))
                            .filter(|p| !self.is_excluded(p))
                            .collect();
                        children.sort();
                        children.reverse();
                        self.stack.extend(children);
                    }
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "cannot list directory");
                    }
                }
            }
            return Some(path);
        }
        None
    }
}

impl FileSystem for LocalFs {
    fn content<'a>(
        &'a self,
        root: &Path,
        excluded: &'a [PathBuf],
    ) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        let mut walker = ContentWalker {
            stack: Vec::new(),
            excluded,
        };
        if !walker.is_excluded(root) {
            walker.stack.push(root.to_path_buf());
        }
        Box::new(walker)
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_leaf(&self, path: &Path) -> FsResult<bool> {
        let meta = fs::symlink_metadata(path).map_err(|e| FsError::from_io(e, path))?;
        if !meta.is_dir() {
            return Ok(true);
        }
        let mut entries = fs::read_dir(path).map_err(|e| FsError::from_io(e, path))?;
        Ok(entries.next().is_none())
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let meta = fs::symlink_metadata(path).map_err(|e| FsError::from_io(e, path))?;
        let result = if meta.is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| FsError::from_io(e, path))
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        let meta = fs::symlink_metadata(path).map_err(|e| FsError::from_io(e, path))?;
        let result = if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| FsError::from_io(e, path))
    }
}
