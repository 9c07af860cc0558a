// ABOUTME: Type definitions for user settings
// ABOUTME: Profile, notification, appearance and privacy preferences

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSettings {
    pub display_name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            display_name: "Learner".to_string(),
            email: String::new(),
            avatar: "👤".to_string(),
            bio: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub email_reminders: bool,
    pub push_notifications: bool,
    pub daily_digest: bool,
    pub weekly_report: bool,
    pub achievement_alerts: bool,
    pub due_date_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_reminders: true,
            push_notifications: true,
            daily_digest: false,
            weekly_report: true,
            achievement_alerts: true,
            due_date_reminders: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Green,
    Cyan,
    Purple,
    Orange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub accent_color: AccentColor,
    pub compact_mode: bool,
    pub animations_enabled: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            accent_color: AccentColor::Green,
            compact_mode: false,
            animations_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivacySettings {
    pub profile_public: bool,
    pub show_progress: bool,
    pub show_activity: bool,
    pub allow_messages: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_public: false,
            show_progress: true,
            show_activity: true,
            allow_messages: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub appearance: AppearanceSettings,
    pub privacy: PrivacySettings,
}
