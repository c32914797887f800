//! Storage backends for uploaded PER documents.
//!
//! Handlers only see [`DocumentStore`]; the shipped implementation is
//! [`LocalDocumentStore`], which writes under a root directory on disk.

use async_trait::async_trait;

mod local;

pub use local::LocalDocumentStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The relative path is absolute or escapes the storage root.
    #[error("Invalid storage path '{0}'")]
    InvalidPath(String),
}

/// A place to put document bytes, addressed by relative path.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store `bytes` at `path` and return the path actually used.
    ///
    /// Existing files are never overwritten: when `path` is taken the
    /// backend picks a free variant of the name.
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String, StorageError>;

    /// Remove a stored document. Removing a missing document succeeds.
    async fn delete(&self, path: &str) -> Result<(), StorageError>;
}
