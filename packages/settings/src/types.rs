// ABOUTME: Partial update structures for user settings
// ABOUTME: Every field is optional; absent fields keep their current value

use learnpath_core::{
    AccentColor, AppearanceSettings, NotificationSettings, PrivacySettings, ProfileSettings,
    Theme, UserSettings,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationUpdate {
    pub email_reminders: Option<bool>,
    pub push_notifications: Option<bool>,
    pub daily_digest: Option<bool>,
    pub weekly_report: Option<bool>,
    pub achievement_alerts: Option<bool>,
    pub due_date_reminders: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceUpdate {
    pub theme: Option<Theme>,
    pub accent_color: Option<AccentColor>,
    pub compact_mode: Option<bool>,
    pub animations_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivacyUpdate {
    pub profile_public: Option<bool>,
    pub show_progress: Option<bool>,
    pub show_activity: Option<bool>,
    pub allow_messages: Option<bool>,
}

/// A partial change to [`UserSettings`], section by section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsUpdate {
    pub profile: Option<ProfileUpdate>,
    pub notifications: Option<NotificationUpdate>,
    pub appearance: Option<AppearanceUpdate>,
    pub privacy: Option<PrivacyUpdate>,
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl ProfileUpdate {
    fn apply_to(self, profile: &mut ProfileSettings) {
        set(&mut profile.display_name, self.display_name);
        set(&mut profile.email, self.email);
        set(&mut profile.avatar, self.avatar);
        set(&mut profile.bio, self.bio);
    }
}

impl NotificationUpdate {
    fn apply_to(self, notifications: &mut NotificationSettings) {
        set(&mut notifications.email_reminders, self.email_reminders);
        set(&mut notifications.push_notifications, self.push_notifications);
        set(&mut notifications.daily_digest, self.daily_digest);
        set(&mut notifications.weekly_report, self.weekly_report);
        set(&mut notifications.achievement_alerts, self.achievement_alerts);
        set(&mut notifications.due_date_reminders, self.due_date_reminders);
    }
}

impl AppearanceUpdate {
    fn apply_to(self, appearance: &mut AppearanceSettings) {
        set(&mut appearance.theme, self.theme);
        set(&mut appearance.accent_color, self.accent_color);
        set(&mut appearance.compact_mode, self.compact_mode);
        set(&mut appearance.animations_enabled, self.animations_enabled);
    }
}

impl PrivacyUpdate {
    fn apply_to(self, privacy: &mut PrivacySettings) {
        set(&mut privacy.profile_public, self.profile_public);
        set(&mut privacy.show_progress, self.show_progress);
        set(&mut privacy.show_activity, self.show_activity);
        set(&mut privacy.allow_messages, self.allow_messages);
    }
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self == &SettingsUpdate::default()
    }

    /// Merge into a copy of `current`; validation happens separately
    pub fn merged_with(self, current: &UserSettings) -> UserSettings {
        let mut next = current.clone();
        if let Some(profile) = self.profile {
            profile.apply_to(&mut next.profile);
        }
        if let Some(notifications) = self.notifications {
            notifications.apply_to(&mut next.notifications);
        }
        if let Some(appearance) = self.appearance {
            appearance.apply_to(&mut next.appearance);
        }
        if let Some(privacy) = self.privacy {
            privacy.apply_to(&mut next.privacy);
        }
        next
    }
}
