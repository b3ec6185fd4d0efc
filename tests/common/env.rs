//! Isolated test environment
//!
//! Every run gets its own project directory and an empty home, so user
//! config and `MODTRIM_*` variables from the host never leak in.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Variables cleared before every run
const HOST_ENV: &[&str] = &[
    "MODTRIM_LOG",
    "MODTRIM_STEP_DELAY_MS",
    "MODTRIM_VERBOSITY",
    "MODTRIM_DESCRIPTOR_EXTENSION",
    "RUST_LOG",
];

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Run modtrim against the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("--project")
            .arg(self.project_root.path())
            .args(args)
            .current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1");
        for key in HOST_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to run modtrim");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn manifest(&self) -> String {
        std::fs::read_to_string(self.path("modtrim.toml")).expect("Failed to read manifest")
    }
}

#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// stdout parsed as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON line {l:?}: {e}")))
            .collect()
    }

    pub fn events_named(&self, name: &str) -> Vec<serde_json::Value> {
        self.events()
            .into_iter()
            .filter(|e| e["event"] == name)
            .collect()
    }
}

#[derive(Default)]
pub struct TestEnvBuilder {
    manifest: Option<String>,
    files: Vec<(String, String)>,
    project_config: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, manifest: &str) -> Self {
        self.manifest = Some(manifest.to_string());
        self
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((path.to_string(), content.to_string()));
        self
    }

    pub fn with_files(mut self, paths: &[&str]) -> Self {
        for path in paths {
            self.files.push((path.to_string(), format!("// {path}\n")));
        }
        self
    }

    /// Write `.modtrim/config.toml`
    pub fn with_project_config(mut self, config: &str) -> Self {
        self.project_config = Some(config.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let home_dir = TempDir::new().expect("Failed to create home dir");

        if let Some(manifest) = &self.manifest {
            std::fs::write(project_root.path().join("modtrim.toml"), manifest)
                .expect("Failed to write manifest");
        }
        for (path, content) in &self.files {
            write_file(&project_root.path().join(path), content);
        }
        if let Some(config) = &self.project_config {
            write_file(&project_root.path().join(".modtrim/config.toml"), config);
        }

        TestEnv {
            project_root,
            home_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_modtrim")),
        }
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
