pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed for key {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("storage write failed for key {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Whole-collection key-value contract. A write replaces the entire blob
/// under a key; readers never see a partially written collection. Backends
/// are synchronous by design (see the concurrency model in DESIGN.md).
pub trait StorageBackend: Send {
    /// Returns the blob stored under `key`, or `None` if it was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the blob under `key` in one step.
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StorageError>;
}
