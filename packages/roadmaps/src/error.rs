use learnpath_core::ValidationError;
use learnpath_settings::SettingsError;
use learnpath_storage::StorageError;
use thiserror::Error;

/// Store action errors. A rejected action leaves the state untouched.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("Roadmap not found: {0}")]
    RoadmapNotFound(String),
    #[error("Step not found: {0}")]
    StepNotFound(String),
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Import failures; the current state is never modified when one is returned
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl From<StorageError> for ImportError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidFormat(reason) => ImportError::InvalidFormat(reason),
            other => ImportError::InvalidFormat(other.to_string()),
        }
    }
}
