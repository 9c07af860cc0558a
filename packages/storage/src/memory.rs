// ABOUTME: In-memory snapshot store
// ABOUTME: Keeps the encoded snapshot bytes so it decodes exactly like the file store

use async_trait::async_trait;
use learnpath_core::AppState;
use tokio::sync::Mutex;

use crate::snapshot::{decode_snapshot, encode_snapshot};
use crate::{SnapshotStore, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<Option<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw snapshot bytes already stored
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            data: Mutex::new(Some(data)),
        }
    }

    pub async fn raw(&self) -> Option<Vec<u8>> {
        self.data.lock().await.clone()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> StorageResult<Option<AppState>> {
        match self.data.lock().await.as_deref() {
            Some(data) => decode_snapshot(data).map(Some),
            None => Ok(None),
        }
    }

    async fn save(&self, state: &AppState) -> StorageResult<()> {
        let data = encode_snapshot(state)?;
        *self.data.lock().await = Some(data);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        let mut state = AppState::empty();
        state.current_streak = 3;
        store.save(&state).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.current_streak, 3);
        assert_eq!(loaded.longest_streak, 3);
        assert!(store.raw().await.is_some());
    }

    #[tokio::test]
    async fn test_with_garbage_data_fails_to_load() {
        let store = MemoryStore::with_data(b"garbage".to_vec());
        assert!(store.load().await.is_err());
    }
}
