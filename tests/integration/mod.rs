// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod fixtures;

/// Test fixture helper for creating temporary directories with Gutenberg-style files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a file with given content, creating parent directories as needed
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Create a seams aux file listing `sentences` with placeholder spans
    pub fn create_seams_file<P: AsRef<Path>>(&self, relative_path: P, sentences: &[&str]) -> PathBuf {
        let content: String = sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| format!("{index}\t{sentence}\t(1,1,1,1)\n"))
            .collect();
        self.create_file(relative_path, &content)
    }
}
