//! File System Abstraction
//!
//! Platform-agnostic file I/O for the application's private data directory,
//! where auto-playlist sidecar files live. Desktop builds map this to an
//! OS-specific data directory; mobile embeddings map it to the app sandbox.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File system access trait
#[async_trait]
pub trait FileSystemAccess: Send + Sync {
    /// Get the application's data directory, creating it if necessary.
    ///
    /// This directory is suitable for persistent application data.
    async fn get_data_directory(&self) -> Result<PathBuf>;

    /// Check if a file or directory exists
    async fn exists(&self, path: &Path) -> Result<bool>;

    /// Read entire file contents into memory
    async fn read_file(&self, path: &Path) -> Result<Bytes>;

    /// Write data to a file, creating it (and parent directories) if needed
    async fn write_file(&self, path: &Path, data: Bytes) -> Result<()>;

    /// Delete a file
    async fn delete_file(&self, path: &Path) -> Result<()>;

    /// List all entries in a directory
    async fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>>;
}
