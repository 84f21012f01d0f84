//! Shared testing harness for `mvcgen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty `Shop` project.
    pub(crate) fn new() -> Self {
        Self::with_project("Shop")
    }

    /// Create a new isolated environment whose project directory is `name`.
    pub(crate) fn with_project(name: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join(name);
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");
        Self { root, project_dir }
    }

    /// Root of the temporary tree (parent of the project directory).
    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Project directory used as the application base path.
    pub(crate) fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Build a command for invoking the compiled `mvcgen` binary inside the project.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mvcgen").expect("Failed to locate mvcgen binary");
        cmd.current_dir(&self.project_dir)
            .env_remove("MVCGEN_PACKAGE_ROOT")
            .env_remove("MVCGEN_LOG");
        cmd
    }

    /// Write a file relative to the project directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the project directory.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.project_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Create a scaffolder package root with a single template override.
    pub(crate) fn create_package(
        &self,
        base_folder: &str,
        template: &str,
        content: &str,
    ) -> PathBuf {
        let package = self.root.path().join("package");
        let folder = package.join("Templates").join(base_folder);
        fs::create_dir_all(&folder).expect("Failed to create package template folder");
        fs::write(folder.join(format!("{}.jinja", template)), content)
            .expect("Failed to write package template");
        package
    }

    /// Assert that a file exists relative to the project directory.
    pub(crate) fn assert_file_exists(&self, relative: &str) {
        let path = self.project_dir.join(relative);
        assert!(path.is_file(), "File should exist at {}", path.display());
    }

    /// Assert that a file does not exist relative to the project directory.
    pub(crate) fn assert_file_not_exists(&self, relative: &str) {
        let path = self.project_dir.join(relative);
        assert!(!path.exists(), "File should not exist at {}", path.display());
    }
}
