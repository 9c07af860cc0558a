// ABOUTME: Common test utilities for store integration tests
// ABOUTME: Fixed-clock stores over in-memory or failing snapshot storage

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use learnpath_core::{AppState, RoadmapCreateInput, StepCreateInput};
use learnpath_gamification::FixedClock;
use learnpath_roadmaps::RoadmapStore;
use learnpath_storage::{MemoryStore, SnapshotStore, StorageError, StorageResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const START: &str = "2024-05-01T10:00:00Z";

pub fn start() -> DateTime<Utc> {
    START.parse().unwrap()
}

/// Store with its clock and backing storage exposed
pub struct TestContext {
    pub store: RoadmapStore,
    pub clock: Arc<FixedClock>,
    #[allow(dead_code)]
    pub storage: Arc<MemoryStore>,
}

/// Store over an empty (catalog-only) state
pub fn setup_empty_store() -> TestContext {
    setup_store(AppState::empty())
}

pub fn setup_store(state: AppState) -> TestContext {
    let clock = Arc::new(FixedClock::new(start()));
    let storage = Arc::new(MemoryStore::new());
    let store = RoadmapStore::new(state, storage.clone(), clock.clone());
    TestContext {
        store,
        clock,
        storage,
    }
}

/// Roadmap input with `steps` numbered steps
#[allow(dead_code)]
pub fn roadmap_input(title: &str, category_id: &str, steps: usize) -> RoadmapCreateInput {
    RoadmapCreateInput {
        title: title.to_string(),
        description: None,
        category_id: Some(category_id.to_string()),
        steps: (1..=steps)
            .map(|i| StepCreateInput {
                title: format!("Step {}", i),
                ..Default::default()
            })
            .collect(),
    }
}

/// Storage whose every operation fails, counting save attempts
#[derive(Default)]
pub struct FailingStore {
    pub save_attempts: AtomicUsize,
}

#[allow(dead_code)]
impl FailingStore {
    pub fn attempts(&self) -> usize {
        self.save_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnapshotStore for FailingStore {
    async fn load(&self) -> StorageResult<Option<AppState>> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read denied",
        )))
    }

    async fn save(&self, _state: &AppState) -> StorageResult<()> {
        self.save_attempts.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        )))
    }

    fn location(&self) -> String {
        "failing".to_string()
    }
}
