// ABOUTME: User settings management for LearnPath
// ABOUTME: Partial updates merged over current settings and validated before they apply

pub mod types;
pub mod validation;

pub use types::{
    AppearanceUpdate, NotificationUpdate, PrivacyUpdate, ProfileUpdate, SettingsUpdate,
};
pub use validation::{validate_settings, SettingsError};

use learnpath_core::UserSettings;
use tracing::{debug, warn};

/// Merge `update` over `current` and validate the result
pub fn apply_settings_update(
    current: &UserSettings,
    update: SettingsUpdate,
) -> Result<UserSettings, SettingsError> {
    if update.is_empty() {
        debug!("Empty settings update");
        return Ok(current.clone());
    }

    let next = update.merged_with(current);
    if let Err(e) = validate_settings(&next) {
        warn!("Rejected settings update: {}", e);
        return Err(e);
    }
    Ok(next)
}
