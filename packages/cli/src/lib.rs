// ABOUTME: Library half of the learnpath binary
// ABOUTME: Configuration, logging, argument types and store bootstrapping

pub mod args;
pub mod config;
pub mod logging;

use learnpath_roadmaps::RoadmapStore;
use learnpath_storage::JsonFileStore;
use std::sync::Arc;
use tracing::debug;

pub use config::{Config, ConfigError};
pub use logging::init_logging;

/// Open the roadmap store backed by the snapshot file in the data directory
pub async fn open_store(config: &Config) -> RoadmapStore {
    let storage = JsonFileStore::in_dir(&config.data_dir);
    debug!("Opening snapshot at {}", storage.path().display());
    RoadmapStore::open(Arc::new(storage)).await
}
