// ABOUTME: Core types, seed catalogs and utilities for LearnPath
// ABOUTME: Foundational package shared by every other LearnPath package

pub mod activity;
pub mod catalog;
pub mod constants;
pub mod rewards;
pub mod settings;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use activity::{DailyActivities, DailyActivity};
pub use catalog::RoadmapTemplate;
pub use rewards::{
    level_from_xp, Achievement, AchievementCategory, AchievementKind, AchievementRequirement,
    ActivityKind, ActivityLog, ActivityLogEntry, LevelInfo, Quest, QuestKind, QuestRequirement,
    QuestStatus, QuestType,
};
pub use settings::{
    AccentColor, AppearanceSettings, NotificationSettings, PrivacySettings, ProfileSettings,
    Theme, UserSettings,
};
pub use types::{
    AppState, Category, CategoryColor, CategoryCreateInput, CategoryUpdateInput, PomodoroSession,
    Resource, ResourceCreateInput, ResourceType, Roadmap, RoadmapCreateInput, RoadmapUpdateInput,
    Step, StepCreateInput, StepUpdateInput,
};

// Re-export constants
pub use constants::{
    learnpath_dir, state_file, state_file_in, ACTIVITY_LOG_CAPACITY, POMODORO_XP_PER_MINUTE,
    STEP_COMPLETION_XP, STORAGE_KEY, XP_PER_LEVEL,
};

// Re-export utilities
pub use utils::{days_between, generate_id};

// Re-export validation
pub use validation::{truncate, validate_description, validate_title, ValidationError};
