mod filesystem;

#[cfg(test)]
pub use filesystem::MockFileSystem;
pub use filesystem::{FileSystem, RealFileSystem};
