//! In-memory file tree for deleter and use case tests

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{FileSystem, FsError, FsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    File,
    Dir,
}

#[derive(Debug, Default)]
struct Tree {
    nodes: BTreeMap<PathBuf, NodeKind>,
    denied: HashSet<PathBuf>,
    remove_calls: usize,
}

impl Tree {
    fn children(&self, path: &Path) -> Vec<PathBuf> {
        self.nodes
            .keys()
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect()
    }

    fn insert_with_ancestors(&mut self, path: &Path, kind: NodeKind) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() || ancestor == Path::new("/") {
                break;
            }
            self.nodes.insert(ancestor.to_path_buf(), NodeKind::Dir);
        }
        self.nodes.insert(path.to_path_buf(), kind);
    }
}

/// Shared handle to an in-memory tree; clones see the same tree
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryFs {
    tree: Arc<Mutex<Tree>>,
}

impl MemoryFs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn file(&self, path: &str) -> &Self {
        self.tree
            .lock()
            .unwrap()
            .insert_with_ancestors(Path::new(path), NodeKind::File);
        self
    }

    pub(crate) fn dir(&self, path: &str) -> &Self {
        self.tree
            .lock()
            .unwrap()
            .insert_with_ancestors(Path::new(path), NodeKind::Dir);
        self
    }

    /// Make every removal of `path` fail with permission denied
    pub(crate) fn deny(&self, path: &str) -> &Self {
        self.tree.lock().unwrap().denied.insert(PathBuf::from(path));
        self
    }

    pub(crate) fn allow(&self, path: &str) {
        self.tree.lock().unwrap().denied.remove(Path::new(path));
    }

    pub(crate) fn has(&self, path: &str) -> bool {
        self.tree.lock().unwrap().nodes.contains_key(Path::new(path))
    }

    pub(crate) fn paths(&self) -> Vec<PathBuf> {
        self.tree.lock().unwrap().nodes.keys().cloned().collect()
    }

    pub(crate) fn remove_calls(&self) -> usize {
        self.tree.lock().unwrap().remove_calls
    }
}

struct MemoryWalker<'a> {
    fs: &'a MemoryFs,
    stack: Vec<PathBuf>,
    excluded: &'a [PathBuf],
}

impl Iterator for MemoryWalker<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let tree = self.fs.tree.lock().unwrap();
        while let Some(path) = self.stack.pop() {
            let Some(kind) = tree.nodes.get(&path) else {
                continue;
            };
            if *kind == NodeKind::Dir {
                let mut children: Vec<PathBuf> = tree
                    .children(&path)
                    .into_iter()
                    .filter(|c| !self.excluded.iter().any(|e| c.starts_with(e)))
                    .collect();
                children.reverse();
                self.stack.extend(children);
            }
            return Some(path);
        }
        None
    }
}

impl FileSystem for MemoryFs {
    fn content<'a>(
        &'a self,
        root: &Path,
        excluded: &'a [PathBuf],
    ) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        let stack = if excluded.iter().any(|e| root.starts_with(e)) {
            Vec::new()
        } else {
            vec![root.to_path_buf()]
        };
        Box::new(MemoryWalker {
            fs: self,
            stack,
            excluded,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.tree.lock().unwrap().nodes.contains_key(path)
    }

    fn is_leaf(&self, path: &Path) -> FsResult<bool> {
        let tree = self.tree.lock().unwrap();
        match tree.nodes.get(path) {
            None => Err(FsError::NotFound(path.to_path_buf())),
            Some(NodeKind::File) => Ok(true),
            Some(NodeKind::Dir) => Ok(tree.children(path).is_empty()),
        }
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let mut tree = self.tree.lock().unwrap();
        tree.remove_calls += 1;
        if tree.denied.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if !tree.nodes.contains_key(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        if !tree.children(path).is_empty() {
            return Err(FsError::Other(format!(
                "directory not empty: {}",
                path.display()
            )));
        }
        tree.nodes.remove(path);
        Ok(())
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        let mut tree = self.tree.lock().unwrap();
        tree.remove_calls += 1;
        if tree.denied.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if !tree.nodes.contains_key(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        tree.nodes.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}
