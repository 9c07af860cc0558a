// ABOUTME: Validation rules for user settings
// ABOUTME: Checks profile text fields before a settings update is accepted

use learnpath_core::UserSettings;
use thiserror::Error;

pub const MAX_DISPLAY_NAME_LENGTH: usize = 50;
pub const MAX_BIO_LENGTH: usize = 500;
pub const MAX_AVATAR_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Display name cannot be empty")]
    EmptyDisplayName,

    #[error("Display name exceeds {0} characters")]
    DisplayNameTooLong(usize),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Bio exceeds {0} characters")]
    BioTooLong(usize),

    #[error("Avatar exceeds {0} characters")]
    AvatarTooLong(usize),
}

/// Validate a complete settings value
pub fn validate_settings(settings: &UserSettings) -> Result<(), SettingsError> {
    let profile = &settings.profile;

    let name = profile.display_name.trim();
    if name.is_empty() {
        return Err(SettingsError::EmptyDisplayName);
    }
    if name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
        return Err(SettingsError::DisplayNameTooLong(MAX_DISPLAY_NAME_LENGTH));
    }

    validate_email(&profile.email)?;

    if profile.bio.chars().count() > MAX_BIO_LENGTH {
        return Err(SettingsError::BioTooLong(MAX_BIO_LENGTH));
    }
    if profile.avatar.chars().count() > MAX_AVATAR_LENGTH {
        return Err(SettingsError::AvatarTooLong(MAX_AVATAR_LENGTH));
    }

    Ok(())
}

/// Empty is allowed (no email on file); otherwise require `local@domain`
fn validate_email(email: &str) -> Result<(), SettingsError> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(());
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(SettingsError::InvalidEmail(email.to_string()))
    }
}
