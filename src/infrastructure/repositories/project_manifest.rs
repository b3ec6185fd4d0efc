//! TOML Project Manifest Repository
//!
//! Loads the project model from `modtrim.toml` and keeps the file in step
//! with every unregistration.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{DescriptorId, Module, ModuleId, ProjectDescriptor, ProjectModel};
use crate::domain::ports::{DescriptorResolver, ModuleRegistry, RegistryError};
use crate::error::{PruneError, PruneResult};

pub const MANIFEST_FILE: &str = "modtrim.toml";
pub const MANIFEST_LOCK_FILE: &str = "modtrim.lock";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct TomlManifest {
    #[serde(default, rename = "module", skip_serializing_if = "Vec::is_empty")]
    modules: Vec<TomlModule>,
    #[serde(default, rename = "external", skip_serializing_if = "Vec::is_empty")]
    externals: Vec<TomlDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TomlModule {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    roots: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    test_roots: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    descriptor: Option<TomlDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TomlDescriptor {
    id: DescriptorId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<DescriptorId>,
}

impl From<&TomlDescriptor> for ProjectDescriptor {
    fn from(d: &TomlDescriptor) -> Self {
        ProjectDescriptor::new(d.id.clone()).with_parent(d.parent.clone())
    }
}

/// Project model backed by `modtrim.toml`
#[derive(Debug)]
pub struct TomlProjectModel {
    path: PathBuf,
    manifest: TomlManifest,
    /// `ids[i]` is the identity of `manifest.modules[i]`
    ids: Vec<ModuleId>,
    model: ProjectModel,
}

impl TomlProjectModel {
    /// Load `<project_dir>/modtrim.toml`
    pub fn open(project_dir: &Path) -> PruneResult<Self> {
        let root = project_dir.canonicalize().map_err(|e| PruneError::Manifest {
            path: project_dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let path = root.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|e| PruneError::Manifest {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&root, path, &content)
    }

    /// Build the model from manifest text; relative paths resolve against `root`
    pub fn parse(root: &Path, path: PathBuf, content: &str) -> PruneResult<Self> {
        let manifest: TomlManifest = toml::from_str(content).map_err(|e| PruneError::Manifest {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let (model, ids) = build_model(root, &manifest);
        tracing::debug!(path = %path.display(), modules = ids.len(), "loaded project manifest");
        Ok(Self {
            path,
            manifest,
            ids,
            model,
        })
    }

    pub fn manifest_path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Path {
        self.model.root()
    }

    pub fn model(&self) -> &ProjectModel {
        &self.model
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_file_name(MANIFEST_LOCK_FILE)
    }

    fn save(&self, manifest: &TomlManifest) -> Result<(), RegistryError> {
        let access = |e: std::io::Error| RegistryError::AccessError {
            message: e.to_string(),
        };

        let lock_file = fs::File::create(self.lock_path()).map_err(access)?;
        lock_file.lock_exclusive().map_err(access)?;

        let result = self.write_atomically(manifest);

        let _ = lock_file.unlock();
        result
    }

    fn write_atomically(&self, manifest: &TomlManifest) -> Result<(), RegistryError> {
        let content =
            toml::to_string_pretty(manifest).map_err(|e| RegistryError::SerializationError {
                message: e.to_string(),
            })?;
        let access = |e: std::io::Error| RegistryError::AccessError {
            message: e.to_string(),
        };

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(access)?;
        temp.write_all(content.as_bytes()).map_err(access)?;
        temp.as_file().sync_all().map_err(access)?;
        temp.persist(&self.path).map_err(|e| access(e.error))?;
        Ok(())
    }
}

impl ModuleRegistry for TomlProjectModel {
    fn modules(&self) -> &[Module] {
        self.model.modules()
    }

    /// Rewrites the manifest first; the in-memory model only changes once
    /// the file is on disk.
    fn unregister(&mut self, id: ModuleId) -> Result<(), RegistryError> {
        let index = self
            .ids
            .iter()
            .position(|m| *m == id)
            .ok_or(RegistryError::UnknownModule { id })?;

        let mut next = self.manifest.clone();
        let removed = next.modules.remove(index);
        if !next.modules.iter().any(|m| m.name == removed.name) {
            for module in &mut next.modules {
                module.dependencies.retain(|d| *d != removed.name);
            }
        }

        self.save(&next)?;
        self.manifest = next;
        self.ids.remove(index);
        self.model.unregister(id)
    }
}

impl DescriptorResolver for TomlProjectModel {
    fn descriptor_of(&self, module: ModuleId) -> Option<&ProjectDescriptor> {
        self.model.descriptor_of(module)
    }

    fn resolve(&self, id: &DescriptorId) -> Option<&ProjectDescriptor> {
        self.model.resolve(id)
    }

    fn owning_module(&self, descriptor: &ProjectDescriptor) -> Option<ModuleId> {
        self.model.owning_module(descriptor)
    }
}

fn build_model(root: &Path, manifest: &TomlManifest) -> (ProjectModel, Vec<ModuleId>) {
    let resolve = |paths: &[PathBuf]| -> Vec<PathBuf> { paths.iter().map(|p| root.join(p)).collect() };

    let mut model = ProjectModel::new(root);
    let mut seen = HashSet::new();
    let ids: Vec<ModuleId> = manifest
        .modules
        .iter()
        .map(|m| {
            if !seen.insert(m.name.as_str()) {
                tracing::warn!(module = %m.name, "duplicate module name in manifest");
            }
            model.add_module(&m.name, resolve(&m.roots), resolve(&m.test_roots))
        })
        .collect();

    for (entry, id) in manifest.modules.iter().zip(&ids) {
        for dependency in &entry.dependencies {
            let target = manifest
                .modules
                .iter()
                .position(|m| m.name == *dependency)
                .map(|i| ids[i]);
            match target {
                Some(target) => model.add_dependency(*id, target),
                None => tracing::warn!(
                    module = %entry.name,
                    dependency = %dependency,
                    "dropping dependency on unknown module"
                ),
            }
        }
        if let Some(descriptor) = &entry.descriptor {
            model.set_descriptor(*id, descriptor.into());
        }
    }

    for external in &manifest.externals {
        model.add_external_descriptor(external.into());
    }

    (model, ids)
}
