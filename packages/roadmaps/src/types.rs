use chrono::{DateTime, NaiveDate, Utc};
use learnpath_core::Step;
use learnpath_gamification::PipelineReport;
use learnpath_progress::DueStep;
use serde::{Deserialize, Serialize};

/// A finished (or abandoned) pomodoro timer run to record against a roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroInput {
    pub roadmap_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Minutes
    pub duration: u32,
    pub completed: bool,
}

/// Result of an action that may feed the gamification engine
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome<T> {
    pub value: T,
    /// Total XP granted by the action and every effect it triggered
    pub xp_awarded: u64,
    /// `None` when the action did not qualify for effects
    pub report: Option<PipelineReport>,
}

impl<T> ActionOutcome<T> {
    pub(crate) fn plain(value: T) -> Self {
        Self {
            value,
            xp_awarded: 0,
            report: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub roadmaps: usize,
    pub categories: usize,
}

/// Owned copy of a [`DueStep`], safe to hold after the store lock is released
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledStep {
    pub roadmap_id: String,
    pub roadmap_title: String,
    pub step: Step,
    pub due_date: NaiveDate,
}

impl From<DueStep<'_>> for ScheduledStep {
    fn from(due: DueStep<'_>) -> Self {
        Self {
            roadmap_id: due.roadmap_id.to_string(),
            roadmap_title: due.roadmap_title.to_string(),
            step: due.step.clone(),
            due_date: due.due_date,
        }
    }
}
