// ABOUTME: Gamification type definitions
// ABOUTME: Achievements, quests, the bounded activity feed and the level curve

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::constants::{ACTIVITY_LOG_CAPACITY, XP_PER_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Completion,
    Streak,
    Study,
    Milestone,
    Special,
}

/// Live statistic an achievement is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    StepsCompleted,
    RoadmapsCompleted,
    StreakDays,
    StudyMinutes,
    QuestsCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRequirement {
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub xp: u64,
    pub category: AchievementCategory,
    pub requirement: AchievementRequirement,
    /// Presence means unlocked; never cleared once set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
    /// Percentage 0..=100, meaningful only while locked
    #[serde(default, deserialize_with = "crate::utils::percent::deserialize")]
    pub progress: u8,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestType {
    Daily,
    Weekly,
    Special,
}

/// Event counter a quest accumulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestKind {
    CompleteSteps,
    StudyMinutes,
    CompleteRoadmap,
    LoginStreak,
    PomodoroSessions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRequirement {
    #[serde(rename = "type")]
    pub kind: QuestKind,
    /// Target
    pub value: u64,
    #[serde(default)]
    pub current: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Available,
    InProgress,
    Completed,
    Locked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub xp: u64,
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    pub requirement: QuestRequirement,
    pub status: QuestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Quest {
    /// Completed and locked quests ignore progress events
    pub fn accepts_progress(&self) -> bool {
        !matches!(self.status, QuestStatus::Completed | QuestStatus::Locked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    StepCompleted,
    RoadmapCompleted,
    QuestCompleted,
    AchievementEarned,
    PomodoroCompleted,
    CourseCompleted,
    QuizCompleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub xp: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_id: Option<String>,
}

/// Newest-first activity feed holding at most [`ACTIVITY_LOG_CAPACITY`] entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityLog {
    entries: VecDeque<ActivityLogEntry>,
}

impl ActivityLog {
    pub const CAPACITY: usize = ACTIVITY_LOG_CAPACITY;

    /// Insert at the front, evicting the oldest entry on overflow
    pub fn push(&mut self, entry: ActivityLogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(Self::CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&ActivityLogEntry> {
        self.entries.front()
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &ActivityLogEntry> {
        self.entries.iter()
    }
}

impl From<Vec<ActivityLogEntry>> for ActivityLog {
    fn from(mut entries: Vec<ActivityLogEntry>) -> Self {
        entries.truncate(Self::CAPACITY);
        Self {
            entries: entries.into(),
        }
    }
}

impl Serialize for ActivityLog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

impl<'de> Deserialize<'de> for ActivityLog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<ActivityLogEntry>::deserialize(deserializer).map(Self::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub level: u64,
    #[serde(rename = "currentXP")]
    pub current_xp: u64,
    #[serde(rename = "requiredXP")]
    pub required_xp: u64,
}

/// Fixed linear curve: one level per 1000 XP, starting at level 1
pub fn level_from_xp(xp: u64) -> LevelInfo {
    LevelInfo {
        level: xp / XP_PER_LEVEL + 1,
        current_xp: xp % XP_PER_LEVEL,
        required_xp: XP_PER_LEVEL,
    }
}
