//! Manifest fixtures

/// `app` needs `core`; `core` sits under the `platform` parent descriptor;
/// `legacy` and `tools` are unrelated.
#[allow(dead_code)]
pub const LAYERED_MANIFEST: &str = r#"
[[module]]
name = "app"
roots = ["app"]
test_roots = ["app/src/test"]
dependencies = ["core"]

[[module]]
name = "core"
roots = ["core"]
test_roots = ["core/src/test"]
descriptor = { id = "core", parent = "platform" }

[[module]]
name = "platform"
roots = ["platform"]
descriptor = { id = "platform" }

[[module]]
name = "legacy"
roots = ["legacy"]
test_roots = ["legacy/src/test"]

[[module]]
name = "tools"
roots = ["tools"]
"#;

/// Files that go with `LAYERED_MANIFEST`
#[allow(dead_code)]
pub const LAYERED_FILES: &[&str] = &[
    "app/src/main/App.java",
    "app/src/test/AppTest.java",
    "core/src/main/Core.java",
    "core/src/test/CoreTest.java",
    "core/core.iml",
    "platform/build.gradle",
    "legacy/src/main/Old.java",
    "legacy/src/test/OldTest.java",
    "legacy/legacy.iml",
    "legacy/.idea/workspace.xml",
    "tools/run.sh",
];
