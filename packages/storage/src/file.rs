// ABOUTME: JSON file snapshot store
// ABOUTME: Writes to a temporary sibling and renames so readers never see a partial file

use async_trait::async_trait;
use learnpath_core::{state_file, state_file_in, AppState};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::snapshot::{decode_snapshot, encode_snapshot};
use crate::{SnapshotStore, StorageResult};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/learning-roadmap-data.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(state_file_in(dir.as_ref()))
    }

    /// Store at the default location under `~/.learnpath`
    pub fn default_location() -> Self {
        Self::new(state_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> StorageResult<Option<AppState>> {
        if fs::metadata(&self.path).await.is_err() {
            debug!("No snapshot at {:?}", self.path);
            return Ok(None);
        }

        debug!("Reading snapshot from: {:?}", self.path);
        let data = fs::read(&self.path).await?;
        decode_snapshot(&data).map(Some)
    }

    async fn save(&self, state: &AppState) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && fs::metadata(parent).await.is_err() {
                debug!("Creating data directory: {:?}", parent);
                fs::create_dir_all(parent).await?;
            }
        }

        let data = encode_snapshot(state)?;
        let temp = self.temp_path();
        fs::write(&temp, &data).await?;
        fs::rename(&temp, &self.path).await?;

        debug!("Wrote {} bytes to {:?}", data.len(), self.path);
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
