//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use genforge_core::{application::ports::Filesystem, error::ForgeResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> genforge_core::error::ForgeError {
    use genforge_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let nested = dir.path().join("src/models");
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));

        let file = nested.join("base_llm.py");
        fs.write_file(&file, "class BaseLLM: ...\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "class BaseLLM: ...\n"
        );
    }

    #[test]
    fn existing_directory_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        fs.create_dir_all(dir.path()).unwrap();
        fs.create_dir_all(dir.path()).unwrap();
    }

    #[test]
    fn write_failure_carries_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        // Writing to a path whose parent does not exist fails.
        let missing = dir.path().join("no_such_dir/file.txt");
        let err = fs.write_file(&missing, "x").unwrap_err();
        assert!(err.to_string().contains("no_such_dir"));
    }
}
