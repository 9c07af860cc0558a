// ABOUTME: Ordered post-mutation effects run after every qualifying action
// ABOUTME: daily activity -> streak -> quest progress -> achievement scan

use chrono::{DateTime, NaiveDate, Utc};
use learnpath_core::{AppState, QuestKind};
use serde::Serialize;
use tracing::debug;

use crate::achievements::scan_achievements;
use crate::quests::update_quest_progress;
use crate::streak::{record_activity, StreakChange};

/// A user action that feeds the gamification engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifyingAction {
    StepCompleted {
        roadmap_id: String,
        /// The completion left every step of the roadmap done
        roadmap_finished: bool,
    },
    PomodoroCompleted {
        roadmap_id: String,
        minutes: u32,
    },
}

impl QualifyingAction {
    pub fn roadmap_id(&self) -> &str {
        match self {
            QualifyingAction::StepCompleted { roadmap_id, .. }
            | QualifyingAction::PomodoroCompleted { roadmap_id, .. } => roadmap_id,
        }
    }

    /// (steps completed, pomodoro minutes) contributed to today's activity
    pub fn daily_counts(&self) -> (u32, u32) {
        match self {
            QualifyingAction::StepCompleted { .. } => (1, 0),
            QualifyingAction::PomodoroCompleted { minutes, .. } => (0, *minutes),
        }
    }

    /// Quest counters advanced by this action, in update order
    pub fn quest_increments(&self) -> Vec<(QuestKind, u64)> {
        match self {
            QualifyingAction::StepCompleted {
                roadmap_finished, ..
            } => {
                let mut increments = vec![(QuestKind::CompleteSteps, 1)];
                if *roadmap_finished {
                    increments.push((QuestKind::CompleteRoadmap, 1));
                }
                increments
            }
            QualifyingAction::PomodoroCompleted { minutes, .. } => vec![
                (QuestKind::StudyMinutes, u64::from(*minutes)),
                (QuestKind::PomodoroSessions, 1),
            ],
        }
    }
}

/// What the effects did, for reporting back to the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub streak: Option<StreakChange>,
    pub completed_quests: Vec<String>,
    pub unlocked_achievements: Vec<String>,
}

pub struct EffectContext {
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
    pub report: PipelineReport,
}

/// One derived-state step of the pipeline
pub trait Effect: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, state: &mut AppState, action: &QualifyingAction, cx: &mut EffectContext);
}

pub struct RecordDailyActivity;

impl Effect for RecordDailyActivity {
    fn name(&self) -> &'static str {
        "daily_activity"
    }

    fn apply(&self, state: &mut AppState, action: &QualifyingAction, cx: &mut EffectContext) {
        let (steps, minutes) = action.daily_counts();
        state
            .daily_activities
            .record(cx.today, steps, minutes, action.roadmap_id());
    }
}

pub struct UpdateStreak;

impl Effect for UpdateStreak {
    fn name(&self) -> &'static str {
        "streak"
    }

    fn apply(&self, state: &mut AppState, _action: &QualifyingAction, cx: &mut EffectContext) {
        cx.report.streak = Some(record_activity(state, cx.today));
    }
}

/// Advances quests for the action's counters, plus `login_streak` on a new active day
pub struct AdvanceQuests;

impl Effect for AdvanceQuests {
    fn name(&self) -> &'static str {
        "quests"
    }

    fn apply(&self, state: &mut AppState, action: &QualifyingAction, cx: &mut EffectContext) {
        let mut increments = action.quest_increments();
        if cx.report.streak.is_some_and(|s| s.is_new_day()) {
            increments.push((QuestKind::LoginStreak, 1));
        }
        for (kind, amount) in increments {
            let completed = update_quest_progress(state, kind, amount, cx.now);
            cx.report.completed_quests.extend(completed);
        }
    }
}

pub struct ScanAchievements;

impl Effect for ScanAchievements {
    fn name(&self) -> &'static str {
        "achievements"
    }

    fn apply(&self, state: &mut AppState, _action: &QualifyingAction, cx: &mut EffectContext) {
        let unlocked = scan_achievements(state, cx.now);
        cx.report.unlocked_achievements.extend(unlocked);
    }
}

pub struct EffectPipeline {
    effects: Vec<Box<dyn Effect>>,
}

impl EffectPipeline {
    pub fn new(effects: Vec<Box<dyn Effect>>) -> Self {
        Self { effects }
    }

    /// daily activity, streak, quests, achievements
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(RecordDailyActivity),
            Box::new(UpdateStreak),
            Box::new(AdvanceQuests),
            Box::new(ScanAchievements),
        ])
    }

    pub fn effect_names(&self) -> Vec<&'static str> {
        self.effects.iter().map(|e| e.name()).collect()
    }

    pub fn run(
        &self,
        state: &mut AppState,
        action: &QualifyingAction,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> PipelineReport {
        let mut cx = EffectContext {
            now,
            today,
            report: PipelineReport::default(),
        };
        for effect in &self.effects {
            debug!("Running effect '{}' for {:?}", effect.name(), action);
            effect.apply(state, action, &mut cx);
        }
        cx.report
    }
}

impl Default for EffectPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
