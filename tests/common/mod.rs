//! Shared testing utilities for mpguide CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `mpguide` binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `mpguide` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("mpguide").expect("Failed to locate mpguide binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Path to the emitted guide in the work directory.
    pub fn guide_path(&self) -> PathBuf {
        self.work_dir.join("multipass_setup_guide.md")
    }

    /// Assert that the guide file exists.
    pub fn assert_guide_exists(&self) {
        assert!(self.guide_path().exists(), "Guide file should exist");
    }

    /// Assert that the guide file does not exist.
    pub fn assert_guide_not_exists(&self) {
        assert!(!self.guide_path().exists(), "Guide file should not exist");
    }

    /// Read the emitted guide file.
    pub fn read_guide(&self) -> String {
        fs::read_to_string(self.guide_path()).expect("Failed to read guide file")
    }
}
