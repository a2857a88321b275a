//! Common test support utilities and fixtures

#![allow(dead_code)]

use std::{fs, path::Path, process::Command};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A temporary directory to build fixture trees and CSV files in
pub struct Workspace {
    pub root: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create a file, making parent directories as needed
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn mkdir(&self, relative: &str) {
        fs::create_dir_all(self.path().join(relative)).expect("Failed to create directory");
    }

    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.path().join(relative)).expect("Failed to read file")
    }
}

/// Run the dirtools binary with given arguments
pub fn run_cli(args: &[&str], cwd: Option<&Path>) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dirtools"));
    cmd.args(args).env_remove("RUST_LOG");

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().expect("Failed to execute dirtools");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
