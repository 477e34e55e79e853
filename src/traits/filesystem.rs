use anyhow::{Context, Result};
use std::path::Path;

/// Trait for the file-reading seam, to enable testing with mocks
pub trait FileSystem {
    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Real filesystem implementation using std::fs
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }
}

/// Mock filesystem implementation for testing (in-memory)
#[cfg(test)]
pub struct MockFileSystem {
    files: std::collections::HashMap<std::path::PathBuf, String>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: std::collections::HashMap::new(),
        }
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files
            .insert(std::path::PathBuf::from(path), contents.to_string());
        self
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .with_context(|| format!("File not found in mock filesystem: {}", path.display()))
    }
}
