// ABOUTME: Achievement evaluator
// ABOUTME: Re-scans locked achievements against live statistics and unlocks each at most once

use chrono::{DateTime, Utc};
use learnpath_core::{AchievementKind, ActivityKind, AppState, QuestStatus};
use learnpath_progress::{completed_roadmap_count, completed_step_count, total_study_time};
use tracing::info;

use crate::ledger::{add_xp, XpGrant};

/// Live values of every statistic an achievement can require
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AchievementStats {
    pub steps_completed: u64,
    pub roadmaps_completed: u64,
    pub streak_days: u64,
    pub study_minutes: u64,
    pub quests_completed: u64,
}

impl AchievementStats {
    pub fn collect(state: &AppState) -> Self {
        Self {
            steps_completed: completed_step_count(state) as u64,
            roadmaps_completed: completed_roadmap_count(state) as u64,
            streak_days: u64::from(state.current_streak),
            study_minutes: total_study_time(state),
            quests_completed: state
                .quests
                .iter()
                .filter(|q| q.status == QuestStatus::Completed)
                .count() as u64,
        }
    }

    pub fn value(&self, kind: AchievementKind) -> u64 {
        match kind {
            AchievementKind::StepsCompleted => self.steps_completed,
            AchievementKind::RoadmapsCompleted => self.roadmaps_completed,
            AchievementKind::StreakDays => self.streak_days,
            AchievementKind::StudyMinutes => self.study_minutes,
            AchievementKind::QuestsCompleted => self.quests_completed,
        }
    }
}

/// Floor of `100 * stat / threshold`, capped at 100. A zero threshold is always met.
pub fn achievement_progress(stat: u64, threshold: u64) -> u8 {
    if threshold == 0 {
        return 100;
    }
    (stat.saturating_mul(100) / threshold).min(100) as u8
}

/// Scan locked achievements in catalog order, unlocking those whose requirement is met.
/// Returns the ids unlocked by this scan.
pub fn scan_achievements(state: &mut AppState, now: DateTime<Utc>) -> Vec<String> {
    let stats = AchievementStats::collect(state);
    let mut unlocked = Vec::new();

    for achievement in state.achievements.iter_mut().filter(|a| !a.is_unlocked()) {
        let stat = stats.value(achievement.requirement.kind);
        if stat >= achievement.requirement.value {
            achievement.unlocked_at = Some(now);
            achievement.progress = 100;
            unlocked.push(achievement.id.clone());
        } else {
            achievement.progress = achievement_progress(stat, achievement.requirement.value);
        }
    }

    for id in &unlocked {
        let Some(achievement) = state.achievements.iter().find(|a| &a.id == id) else {
            continue;
        };
        let grant = XpGrant::new(
            ActivityKind::AchievementEarned,
            achievement.xp,
            format!("Earned badge: {}", achievement.name),
        )
        .description(achievement.description.clone())
        .related(achievement.id.clone());

        info!("Achievement unlocked: {} (+{} XP)", achievement.name, achievement.xp);
        add_xp(state, grant, now);
    }

    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnpath_core::{Roadmap, Step};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        "2024-05-01T10:00:00Z".parse().unwrap()
    }

    fn state_with_completed_steps(n: usize) -> AppState {
        let mut state = AppState::empty();
        let mut roadmap = Roadmap::new("Rust", "programming", now());
        for i in 0..n {
            let mut step = Step::new(format!("Step {}", i), now());
            step.set_completed(true, now());
            roadmap.steps.push(step);
        }
        roadmap.steps.push(Step::new("Open", now()));
        state.roadmaps.push(roadmap);
        state
    }

    #[rstest]
    #[case(0, 10, 0)]
    #[case(3, 10, 30)]
    #[case(2, 3, 66)]
    #[case(15, 10, 100)]
    #[case(0, 0, 100)]
    fn test_progress(#[case] stat: u64, #[case] threshold: u64, #[case] expected: u8) {
        assert_eq!(achievement_progress(stat, threshold), expected);
    }

    #[test]
    fn test_first_step_unlocks_once() {
        let mut state = state_with_completed_steps(1);

        let unlocked = scan_achievements(&mut state, now());
        assert_eq!(unlocked, vec!["first_step".to_string()]);
        assert_eq!(state.total_xp, 50);
        assert_eq!(state.activity_log.len(), 1);

        let entry = state.activity_log.latest().unwrap();
        assert_eq!(entry.kind, ActivityKind::AchievementEarned);
        assert_eq!(entry.title, "Earned badge: First Step");
        assert_eq!(entry.related_id.as_deref(), Some("first_step"));

        // Second scan with no stat change grants nothing
        let again = scan_achievements(&mut state, now());
        assert!(again.is_empty());
        assert_eq!(state.total_xp, 50);
        assert_eq!(state.activity_log.len(), 1);
    }

    #[test]
    fn test_progress_tracked_while_locked() {
        let mut state = state_with_completed_steps(3);
        scan_achievements(&mut state, now());

        let getting_started = state
            .achievements
            .iter()
            .find(|a| a.id == "step_master_10")
            .unwrap();
        assert!(!getting_started.is_unlocked());
        assert_eq!(getting_started.progress, 30);
    }

    #[test]
    fn test_simultaneous_unlocks_follow_catalog_order() {
        let mut state = state_with_completed_steps(10);
        let unlocked = scan_achievements(&mut state, now());

        assert_eq!(
            unlocked,
            vec![
                "first_step".to_string(),
                "step_master_10".to_string(),
                "speed_learner".to_string()
            ]
        );
        assert_eq!(state.total_xp, 50 + 100 + 150);
        // newest first: last unlocked is on top
        assert_eq!(
            state.activity_log.latest().unwrap().related_id.as_deref(),
            Some("speed_learner")
        );
    }

    #[test]
    fn test_unlocked_achievements_never_relock() {
        let mut state = state_with_completed_steps(1);
        scan_achievements(&mut state, now());

        state.roadmaps[0].steps[0].set_completed(false, now());
        scan_achievements(&mut state, now());

        let first = state.achievements.iter().find(|a| a.id == "first_step").unwrap();
        assert!(first.is_unlocked());
        assert_eq!(first.progress, 100);
    }

    #[test]
    fn test_stats_collect() {
        let mut state = state_with_completed_steps(2);
        state.roadmaps[0].total_study_time = 75;
        state.current_streak = 4;
        state.quests[0].status = QuestStatus::Completed;

        let stats = AchievementStats::collect(&state);
        assert_eq!(stats.steps_completed, 2);
        assert_eq!(stats.roadmaps_completed, 0);
        assert_eq!(stats.streak_days, 4);
        assert_eq!(stats.study_minutes, 75);
        assert_eq!(stats.quests_completed, 1);
    }
}
