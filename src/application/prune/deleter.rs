//! File tree deletion
//!
//! Directory removal is bottom-up, and a single pre-order pass only sees a
//! directory before its children are gone. So the leaf pass is repeated
//! until it deletes nothing, up to [`MAX_DELETE_PASSES`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{Module, ModuleId};
use crate::domain::policies::WorkspaceFilePolicy;
use crate::domain::ports::{FileSystem, RemovalEvent, RemovalEventSink};

/// Upper bound on leaf passes per module tree
pub const MAX_DELETE_PASSES: usize = 40;

/// The files a module owns: its content roots minus nested roots of other modules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleFileIndex {
    roots: Vec<PathBuf>,
    excluded: Vec<PathBuf>,
}

impl ModuleFileIndex {
    pub fn new(roots: Vec<PathBuf>, excluded: Vec<PathBuf>) -> Self {
        Self { roots, excluded }
    }

    /// Index of `module` against the currently registered `modules`.
    ///
    /// Any content root of another module that lies inside (or equals) one of
    /// this module's roots is excluded, so kept modules nested under a
    /// disposed aggregator survive.
    pub fn for_module(module: ModuleId, modules: &[Module]) -> Self {
        let Some(own) = modules.iter().find(|m| m.id() == module) else {
            return Self::default();
        };
        let roots = own.content_roots().to_vec();
        let excluded = modules
            .iter()
            .filter(|m| m.id() != module)
            .flat_map(|m| m.content_roots())
            .filter(|other| roots.iter().any(|root| other.starts_with(root)))
            .cloned()
            .collect();
        Self { roots, excluded }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn excluded(&self) -> &[PathBuf] {
        &self.excluded
    }
}

/// Outcome of deleting one module's tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeDeletion {
    /// Leaf passes run
    pub passes: usize,
    /// Files and empty directories removed
    pub files_deleted: usize,
    /// Failed delete attempts (a node retried in several passes counts each time)
    pub failed_attempts: usize,
    /// The pass cap was reached while passes were still deleting
    pub exhausted: bool,
}

impl TreeDeletion {
    /// Whether content may remain on disk
    pub fn may_leave_residue(&self) -> bool {
        self.exhausted || self.failed_attempts > 0
    }
}

pub struct FileTreeDeleter<FS: FileSystem> {
    fs: FS,
    policy: WorkspaceFilePolicy,
    events: Arc<dyn RemovalEventSink>,
}

impl<FS: FileSystem> FileTreeDeleter<FS> {
    pub fn new(fs: FS, policy: WorkspaceFilePolicy, events: Arc<dyn RemovalEventSink>) -> Self {
        Self { fs, policy, events }
    }

    /// Delete everything deletable under `index`, retrying until stable
    pub fn delete_tree(&self, index: &ModuleFileIndex) -> TreeDeletion {
        let mut summary = TreeDeletion::default();
        while summary.passes < MAX_DELETE_PASSES {
            summary.passes += 1;
            if !self.delete_leaves(index, &mut summary) {
                return summary;
            }
        }

        summary.exhausted = true;
        tracing::warn!(
            roots = ?index.roots(),
            passes = MAX_DELETE_PASSES,
            "deletion did not settle, content may remain"
        );
        summary
    }

    /// One pass: delete every unprotected leaf. Returns whether anything was deleted.
    pub fn delete_leaves(&self, index: &ModuleFileIndex, summary: &mut TreeDeletion) -> bool {
        let detailed = self.events.wants_detailed_events();
        let mut deleted_any = false;

        for root in index.roots() {
            for path in self.fs.content(root, index.excluded()) {
                if self.policy.is_protected_in(root, &path) {
                    tracing::info!(path = %path.display(), "skip file");
                    if detailed {
                        self.events.on_event(RemovalEvent::FileSkipped { path });
                    }
                    continue;
                }

                match self.fs.is_leaf(&path) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "cannot inspect node");
                        continue;
                    }
                }

                tracing::info!(path = %path.display(), "removing file");
                match self.fs.remove(&path) {
                    Ok(()) => {
                        deleted_any = true;
                        summary.files_deleted += 1;
                        if detailed {
                            self.events.on_event(RemovalEvent::FileDeleted { path });
                        }
                    }
                    Err(e) => {
                        summary.failed_attempts += 1;
                        tracing::warn!(path = %path.display(), error = %e, "failed to delete");
                        if detailed {
                            self.events.on_event(RemovalEvent::FileError {
                                path,
                                error: e.to_string(),
                            });
                        }
                    }
                }
            }
        }

        deleted_any
    }

    /// Remove a whole directory in a single attempt. Failure is logged, not raised.
    ///
    /// A directory that holds a content root of any of `modules` is left in
    /// place, as the recursive removal would take that module's files with it.
    pub fn delete_directory(&self, path: &Path, modules: &[Module]) -> bool {
        let nested = modules
            .iter()
            .flat_map(|m| m.content_roots())
            .find(|root| root.starts_with(path));
        if let Some(nested) = nested {
            tracing::warn!(
                path = %path.display(),
                nested = %nested.display(),
                "directory holds a module content root, not removing"
            );
            if self.events.wants_detailed_events() {
                self.events.on_event(RemovalEvent::FileError {
                    path: path.to_path_buf(),
                    error: format!("holds module content root {}", nested.display()),
                });
            }
            return false;
        }

        tracing::info!(path = %path.display(), "removing directory");
        match self.fs.remove_all(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to delete");
                if self.events.wants_detailed_events() {
                    self.events.on_event(RemovalEvent::FileError {
                        path: path.to_path_buf(),
                        error: e.to_string(),
                    });
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::prune::memory_fs::MemoryFs;
    use crate::domain::ports::NoopEventSink;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<RemovalEvent>>);

    impl RemovalEventSink for Recorder {
        fn on_event(&self, event: RemovalEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn deleter(fs: &MemoryFs) -> FileTreeDeleter<MemoryFs> {
        FileTreeDeleter::new(
            fs.clone(),
            WorkspaceFilePolicy::default(),
            Arc::new(NoopEventSink),
        )
    }

    fn index(root: &str) -> ModuleFileIndex {
        ModuleFileIndex::new(vec![PathBuf::from(root)], Vec::new())
    }

    #[test]
    fn deletes_whole_tree_bottom_up() {
        let fs = MemoryFs::new();
        fs.file("/p/lib/src/main/A.java")
            .file("/p/lib/src/main/B.java")
            .file("/p/lib/pom.xml");

        let summary = deleter(&fs).delete_tree(&index("/p/lib"));

        assert!(!fs.has("/p/lib"));
        assert!(fs.has("/p"));
        assert!(!summary.exhausted);
        assert_eq!(summary.failed_attempts, 0);
        // files + src/main + src + lib
        assert_eq!(summary.files_deleted, 6);
    }

    #[test]
    fn single_pass_only_removes_current_leaves() {
        let fs = MemoryFs::new();
        fs.file("/p/lib/a/b/file.txt");
        let mut summary = TreeDeletion::default();

        let deleted = deleter(&fs).delete_leaves(&index("/p/lib"), &mut summary);

        assert!(deleted);
        assert!(!fs.has("/p/lib/a/b/file.txt"));
        assert!(fs.has("/p/lib/a/b"));
    }

    #[test]
    fn pass_count_tracks_depth() {
        let fs = MemoryFs::new();
        fs.file("/p/lib/a/b/file.txt");

        let summary = deleter(&fs).delete_tree(&index("/p/lib"));

        // file, b, a, lib each need a pass, then one pass that deletes nothing
        assert_eq!(summary.passes, 5);
        assert!(!fs.has("/p/lib"));
    }

    #[test]
    fn protected_files_are_skipped() {
        let fs = MemoryFs::new();
        fs.file("/p/lib/.idea/foo.xml")
            .file("/p/lib/.idea/foo.iml")
            .file("/p/lib/lib.iml")
            .file("/p/lib/src/A.java");

        deleter(&fs).delete_tree(&index("/p/lib"));

        assert!(fs.has("/p/lib/.idea/foo.xml"));
        assert!(!fs.has("/p/lib/.idea/foo.iml"));
        assert!(!fs.has("/p/lib/lib.iml"));
        assert!(!fs.has("/p/lib/src"));
        // the protected file keeps its directories alive
        assert!(fs.has("/p/lib/.idea"));
        assert!(fs.has("/p/lib"));
    }

    #[test]
    fn project_inside_a_workspace_named_directory_is_still_pruned() {
        let fs = MemoryFs::new();
        fs.file("/home/.idea/proj/lib/src/A.java")
            .file("/home/.idea/proj/lib/.idea/misc.xml");

        deleter(&fs).delete_tree(&index("/home/.idea/proj/lib"));

        assert!(!fs.has("/home/.idea/proj/lib/src"));
        assert!(fs.has("/home/.idea/proj/lib/.idea/misc.xml"));
    }

    #[test]
    fn skips_are_reported_to_detailed_sinks() {
        let fs = MemoryFs::new();
        fs.file("/p/lib/app.ipr");
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let deleter = FileTreeDeleter::new(
            fs.clone(),
            WorkspaceFilePolicy::default(),
            recorder.clone(),
        );

        let mut summary = TreeDeletion::default();
        deleter.delete_leaves(&index("/p/lib"), &mut summary);

        let events = recorder.0.lock().unwrap();
        assert!(events.contains(&RemovalEvent::FileSkipped {
            path: PathBuf::from("/p/lib/app.ipr")
        }));
    }

    #[test]
    fn denied_file_stays_and_is_not_fatal() {
        let fs = MemoryFs::new();
        fs.file("/p/lib/locked.bin")
            .file("/p/lib/free.txt")
            .deny("/p/lib/locked.bin");

        let summary = deleter(&fs).delete_tree(&index("/p/lib"));

        assert!(fs.has("/p/lib/locked.bin"));
        assert!(!fs.has("/p/lib/free.txt"));
        assert!(fs.has("/p/lib"));
        // retried once per pass: pass 1 deletes free.txt, pass 2 deletes nothing
        assert_eq!(summary.passes, 2);
        assert_eq!(summary.failed_attempts, 2);
        assert!(summary.may_leave_residue());
    }

    #[test]
    fn file_denied_once_is_deleted_on_a_later_pass() {
        let fs = MemoryFs::new();
        fs.file("/p/lib/a/nested.txt")
            .file("/p/lib/flaky.txt")
            .deny("/p/lib/flaky.txt");
        let deleter = deleter(&fs);
        let idx = index("/p/lib");

        let mut summary = TreeDeletion::default();
        assert!(deleter.delete_leaves(&idx, &mut summary));
        assert!(fs.has("/p/lib/flaky.txt"));

        fs.allow("/p/lib/flaky.txt");
        assert!(deleter.delete_leaves(&idx, &mut summary));
        assert!(!fs.has("/p/lib/flaky.txt"));
    }

    #[test]
    fn retry_loop_is_capped() {
        let fs = MemoryFs::new();
        let mut deep = String::from("/p/deep");
        for level in 0..45 {
            deep.push_str(&format!("/d{}", level));
        }
        fs.dir(&deep);

        let summary = deleter(&fs).delete_tree(&index("/p/deep"));

        assert_eq!(summary.passes, MAX_DELETE_PASSES);
        assert!(summary.exhausted);
        assert_eq!(summary.files_deleted, MAX_DELETE_PASSES);
        // residue is accepted
        assert!(fs.has("/p/deep"));
    }

    #[test]
    fn tree_within_pass_budget_is_fully_removed() {
        let fs = MemoryFs::new();
        let mut deep = String::from("/p/deep");
        for level in 0..38 {
            deep.push_str(&format!("/d{}", level));
        }
        fs.dir(&deep);

        let summary = deleter(&fs).delete_tree(&index("/p/deep"));

        assert!(!fs.has("/p/deep"));
        assert!(!summary.exhausted);
        assert_eq!(summary.passes, 40);
    }

    #[test]
    fn nested_roots_of_other_modules_are_not_touched() {
        let fs = MemoryFs::new();
        fs.file("/p/pom.xml")
            .file("/p/core/pom.xml")
            .file("/p/core/src/Core.java")
            .file("/p/legacy/Old.java");
        let modules = vec![
            Module::new(ModuleId::new(0), "root").with_content_roots(vec![PathBuf::from("/p")]),
            Module::new(ModuleId::new(1), "core")
                .with_content_roots(vec![PathBuf::from("/p/core")]),
        ];

        let idx = ModuleFileIndex::for_module(ModuleId::new(0), &modules);
        assert_eq!(idx.excluded(), &[PathBuf::from("/p/core")]);

        deleter(&fs).delete_tree(&idx);

        assert!(fs.has("/p/core/src/Core.java"));
        assert!(fs.has("/p/core/pom.xml"));
        assert!(!fs.has("/p/pom.xml"));
        assert!(!fs.has("/p/legacy"));
        assert!(fs.has("/p"));
    }

    #[test]
    fn index_for_unknown_module_is_empty() {
        let idx = ModuleFileIndex::for_module(ModuleId::new(7), &[]);
        assert!(idx.roots().is_empty());
    }

    #[test]
    fn delete_directory_is_single_attempt() {
        let fs = MemoryFs::new();
        fs.file("/p/lib/src/test/T.java").deny("/p/lib/src/test");
        let deleter = deleter(&fs);

        assert!(!deleter.delete_directory(Path::new("/p/lib/src/test"), &[]));
        assert_eq!(fs.remove_calls(), 1);
        assert!(fs.has("/p/lib/src/test/T.java"));
    }

    #[test]
    fn delete_directory_removes_subtree() {
        let fs = MemoryFs::new();
        fs.file("/p/lib/src/test/a/T.java")
            .file("/p/lib/src/main/M.java");

        assert!(deleter(&fs).delete_directory(Path::new("/p/lib/src/test"), &[]));
        assert!(!fs.has("/p/lib/src/test"));
        assert!(fs.has("/p/lib/src/main/M.java"));
        assert!(!fs.paths().is_empty());
    }

    #[test]
    fn delete_directory_keeps_nested_module_roots() {
        let fs = MemoryFs::new();
        fs.file("/p/lib/src/test/T.java")
            .file("/p/lib/src/test/fixtures/pom.xml");
        let modules = vec![
            Module::new(ModuleId::new(0), "lib").with_content_roots(vec![PathBuf::from("/p/lib")]),
            Module::new(ModuleId::new(1), "fixtures")
                .with_content_roots(vec![PathBuf::from("/p/lib/src/test/fixtures")]),
        ];

        let removed = deleter(&fs).delete_directory(Path::new("/p/lib/src/test"), &modules);

        assert!(!removed);
        assert_eq!(fs.remove_calls(), 0);
        assert!(fs.has("/p/lib/src/test/T.java"));
        assert!(fs.has("/p/lib/src/test/fixtures/pom.xml"));
    }
}
