// ABOUTME: Persistence layer for the LearnPath application state
// ABOUTME: Snapshot store trait with JSON file and in-memory implementations

use async_trait::async_trait;
use learnpath_core::AppState;
use thiserror::Error;

pub mod file;
pub mod memory;
pub mod snapshot;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use snapshot::{
    compress_data, decode_import, decode_snapshot, decompress_data, encode_snapshot,
    is_compressed,
};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Compression error: {0}")]
    Compression(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value persistence of one full state snapshot
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet
    async fn load(&self) -> StorageResult<Option<AppState>>;

    /// Overwrite the stored snapshot
    async fn save(&self, state: &AppState) -> StorageResult<()>;

    /// Where the snapshot lives, for log messages
    fn location(&self) -> String;
}
