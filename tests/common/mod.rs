//! Common test utilities for sapp integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway project root for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Create a directory in workspace
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in workspace (without following a final symlink)
    pub fn entry_exists(&self, path: &str) -> bool {
        std::fs::symlink_metadata(self.path.join(path)).is_ok()
    }

    /// Check if a path in workspace is a symlink
    pub fn is_symlink(&self, path: &str) -> bool {
        std::fs::symlink_metadata(self.path.join(path))
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
    }

    /// Read a symlink target in workspace
    pub fn read_link(&self, path: &str) -> PathBuf {
        std::fs::read_link(self.path.join(path)).expect("Failed to read symlink")
    }

    /// Put a fake release binary at .build/release/<name>
    pub fn create_release_binary(&self, name: &str) -> PathBuf {
        let rel = format!(".build/release/{name}");
        self.write_file(&rel, "#!/bin/sh\necho hello\n");
        self.path.join(rel)
    }
}
