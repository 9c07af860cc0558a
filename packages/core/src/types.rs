// ABOUTME: Roadmap domain type definitions and the aggregate application state
// ABOUTME: Roadmaps own steps, steps own resources; AppState is the single root

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::DailyActivities;
use crate::catalog;
use crate::rewards::{level_from_xp, Achievement, ActivityLog, Quest};
use crate::settings::UserSettings;
use crate::utils::{generate_id, optional_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Link,
    File,
    Note,
}

/// Study material attached to a step; `content` is a URL, a filename or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCreateInput {
    pub resource_type: ResourceType,
    pub title: String,
    pub content: String,
}

/// A single unit of work inside a roadmap.
///
/// `completed_at` is present if and only if `completed` is true; use
/// [`Step::set_completed`] rather than writing the fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_date"
    )]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Step {
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id("step"),
            title: title.into(),
            description: None,
            completed: false,
            created_at: now,
            completed_at: None,
            due_date: None,
            resources: Vec::new(),
        }
    }

    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        self.completed = completed;
        self.completed_at = if completed { Some(now) } else { None };
    }

    /// Restore the completed/completed_at pairing on data that came from outside
    pub fn normalize(&mut self) {
        match (self.completed, self.completed_at) {
            (true, None) => self.completed_at = Some(self.created_at),
            (false, Some(_)) => self.completed_at = None,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepCreateInput {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Partial step update. Completion is changed only through toggling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepUpdateInput {
    pub title: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    /// `Some(None)` clears the due date
    pub due_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Weak reference; empty or dangling means "uncategorized"
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub steps: Vec<Step>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Accumulated study minutes
    #[serde(default)]
    pub total_study_time: u32,
}

impl Roadmap {
    pub fn new(title: impl Into<String>, category_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id("rm"),
            title: title.into(),
            description: None,
            category_id: category_id.into(),
            steps: Vec::new(),
            created_at: now,
            updated_at: now,
            total_study_time: 0,
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn completed_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    /// True when the roadmap has steps and every one of them is done
    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(|s| s.completed)
    }

    pub fn step(&self, step_id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    pub fn step_mut(&mut self, step_id: &str) -> Option<&mut Step> {
        self.steps.iter_mut().find(|s| s.id == step_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapCreateInput {
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub steps: Vec<StepCreateInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapUpdateInput {
    pub title: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Green,
    Cyan,
    Yellow,
    Orange,
    Purple,
    Pink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: CategoryColor,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCreateInput {
    pub name: String,
    pub color: CategoryColor,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryUpdateInput {
    pub name: Option<String>,
    pub color: Option<CategoryColor>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroSession {
    pub id: String,
    pub roadmap_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Minutes
    pub duration: u32,
    pub completed: bool,
}

/// The single aggregate root. Fields missing from a stored snapshot are
/// back-filled one by one: catalogs get their defaults, `roadmaps` stays empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub roadmaps: Vec<Roadmap>,
    #[serde(default = "catalog::default_categories")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub pomodoro_sessions: Vec<PomodoroSession>,
    #[serde(default)]
    pub daily_activities: DailyActivities,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default, with = "optional_date")]
    pub last_active_date: Option<NaiveDate>,
    #[serde(rename = "totalXP", default)]
    pub total_xp: u64,
    #[serde(default = "first_level")]
    pub level: u64,
    #[serde(default = "catalog::default_achievements")]
    pub achievements: Vec<Achievement>,
    #[serde(default = "catalog::default_quests")]
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub activity_log: ActivityLog,
    #[serde(default)]
    pub settings: UserSettings,
}

fn first_level() -> u64 {
    1
}

impl AppState {
    /// First-run state: default categories, catalogs and the sample roadmaps
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            roadmaps: catalog::sample_roadmaps(now),
            ..Self::empty()
        }
    }

    /// Catalog-only state with no roadmaps
    pub fn empty() -> Self {
        Self {
            roadmaps: Vec::new(),
            categories: catalog::default_categories(),
            pomodoro_sessions: Vec::new(),
            daily_activities: DailyActivities::default(),
            current_streak: 0,
            longest_streak: 0,
            last_active_date: None,
            total_xp: 0,
            level: 1,
            achievements: catalog::default_achievements(),
            quests: catalog::default_quests(),
            activity_log: ActivityLog::default(),
            settings: UserSettings::default(),
        }
    }

    pub fn roadmap(&self, id: &str) -> Option<&Roadmap> {
        self.roadmaps.iter().find(|r| r.id == id)
    }

    pub fn roadmap_mut(&mut self, id: &str) -> Option<&mut Roadmap> {
        self.roadmaps.iter_mut().find(|r| r.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        if id.is_empty() {
            return None;
        }
        self.categories.iter().find(|c| c.id == id)
    }

    /// Repair invariants on data loaded from outside the engine
    pub fn normalize(&mut self) {
        for roadmap in &mut self.roadmaps {
            for step in &mut roadmap.steps {
                step.normalize();
            }
        }
        self.level = level_from_xp(self.total_xp).level;
        self.longest_streak = self.longest_streak.max(self.current_streak);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(ts: &str) -> DateTime<Utc> {
        ts.parse().unwrap()
    }

    #[test]
    fn test_step_completion_pairing() {
        let now = at("2024-05-01T10:00:00Z");
        let mut step = Step::new("Read chapter 1", now);
        assert!(step.completed_at.is_none());

        step.set_completed(true, now);
        assert!(step.completed);
        assert_eq!(step.completed_at, Some(now));

        step.set_completed(false, now);
        assert!(!step.completed);
        assert!(step.completed_at.is_none());
    }

    #[test]
    fn test_step_normalize() {
        let now = at("2024-05-01T10:00:00Z");
        let mut step = Step::new("Orphan", now);
        step.completed = true;
        step.normalize();
        assert_eq!(step.completed_at, Some(now));

        step.completed = false;
        step.normalize();
        assert!(step.completed_at.is_none());
    }

    #[test]
    fn test_roadmap_is_complete() {
        let now = at("2024-05-01T10:00:00Z");
        let mut roadmap = Roadmap::new("Empty", "", now);
        assert!(!roadmap.is_complete());

        roadmap.steps.push(Step::new("One", now));
        assert!(!roadmap.is_complete());

        roadmap.steps[0].set_completed(true, now);
        assert!(roadmap.is_complete());
        assert_eq!(roadmap.completed_steps(), 1);
    }

    #[test]
    fn test_missing_fields_backfilled() {
        let json = r#"{
            "roadmaps": [{
                "id": "r1",
                "title": "Old",
                "categoryId": "programming",
                "steps": [{ "id": "s1", "title": "A", "completed": false, "createdAt": "2024-05-01T10:00:00Z" }],
                "createdAt": "2024-05-01T10:00:00Z",
                "updatedAt": "2024-05-01T10:00:00Z"
            }],
            "categories": [],
            "lastActiveDate": ""
        }"#;

        let state: AppState = serde_json::from_str(json).unwrap();
        assert_eq!(state.roadmaps.len(), 1);
        assert_eq!(state.roadmaps[0].total_study_time, 0);
        assert!(state.roadmaps[0].steps[0].resources.is_empty());
        assert!(state.categories.is_empty());
        assert_eq!(state.achievements.len(), catalog::default_achievements().len());
        assert_eq!(state.level, 1);
        assert!(state.last_active_date.is_none());
    }

    #[test]
    fn test_missing_roadmaps_stay_empty() {
        let state: AppState = serde_json::from_str(r#"{ "totalXP": 250 }"#).unwrap();

        assert!(state.roadmaps.is_empty());
        assert_eq!(state.categories, catalog::default_categories());
        assert_eq!(state.quests.len(), catalog::default_quests().len());
        assert_eq!(state.total_xp, 250);
        assert_eq!(state, AppState { total_xp: 250, ..AppState::default() });
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let mut state = AppState::empty();
        state.total_xp = 1500;
        state.last_active_date = NaiveDate::from_ymd_opt(2024, 5, 1);

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["totalXP"], 1500);
        assert_eq!(value["lastActiveDate"], "2024-05-01");
        assert!(value.get("pomodoroSessions").is_some());
        assert!(value.get("activityLog").is_some());
    }

    #[test]
    fn test_state_round_trip() {
        let state = AppState::seeded(at("2024-05-01T10:00:00Z"));
        let json = serde_json::to_string(&state).unwrap();
        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_dangling_category_lookup() {
        let state = AppState::empty();
        assert!(state.category("").is_none());
        assert!(state.category("deleted").is_none());
        assert_eq!(state.category("programming").unwrap().name, "Programming");
    }
}
