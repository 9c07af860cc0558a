// ABOUTME: Quest tracker
// ABOUTME: Accumulates event counters into quests, completes them terminally, handles resets

use chrono::{DateTime, Utc};
use learnpath_core::{ActivityKind, AppState, QuestKind, QuestStatus, QuestType};
use tracing::{debug, info};

use crate::ledger::{add_xp, XpGrant};

/// Add `amount` to every open quest counting `kind`. Returns the ids completed by this call.
pub fn update_quest_progress(
    state: &mut AppState,
    kind: QuestKind,
    amount: u64,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut completed = Vec::new();

    for quest in state
        .quests
        .iter_mut()
        .filter(|q| q.accepts_progress() && q.requirement.kind == kind)
    {
        let current = quest.requirement.current.saturating_add(amount);
        quest.requirement.current = current;

        if current >= quest.requirement.value {
            quest.status = QuestStatus::Completed;
            quest.completed_at = Some(now);
            completed.push(quest.id.clone());
        } else if current > 0 {
            quest.status = QuestStatus::InProgress;
        }
    }

    for id in &completed {
        let Some(quest) = state.quests.iter().find(|q| &q.id == id) else {
            continue;
        };
        let grant = XpGrant::new(
            ActivityKind::QuestCompleted,
            quest.xp,
            format!("Completed quest: {}", quest.title),
        )
        .description(quest.description.clone())
        .related(quest.id.clone());

        info!("Quest completed: {} (+{} XP)", quest.title, quest.xp);
        add_xp(state, grant, now);
    }

    completed
}

fn reset_quests_of_type(state: &mut AppState, quest_type: QuestType) -> usize {
    let mut reset = 0;
    for quest in state.quests.iter_mut().filter(|q| q.quest_type == quest_type) {
        quest.requirement.current = 0;
        quest.status = QuestStatus::Available;
        quest.completed_at = None;
        reset += 1;
    }
    debug!("Reset {} {:?} quests", reset, quest_type);
    reset
}

/// Zero every daily quest and make it available again
pub fn reset_daily_quests(state: &mut AppState) -> usize {
    reset_quests_of_type(state, QuestType::Daily)
}

/// Zero every weekly quest and make it available again
pub fn reset_weekly_quests(state: &mut AppState) -> usize {
    reset_quests_of_type(state, QuestType::Weekly)
}

/// Move a locked quest to available. Returns false for unknown or non-locked quests.
pub fn unlock_quest(state: &mut AppState, quest_id: &str) -> bool {
    match state.quests.iter_mut().find(|q| q.id == quest_id) {
        Some(quest) if quest.status == QuestStatus::Locked => {
            quest.status = QuestStatus::Available;
            info!("Quest unlocked: {}", quest.title);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        "2024-05-01T10:00:00Z".parse().unwrap()
    }

    fn quest<'a>(state: &'a AppState, id: &str) -> &'a learnpath_core::Quest {
        state.quests.iter().find(|q| q.id == id).unwrap()
    }

    #[test]
    fn test_progress_moves_to_in_progress() {
        let mut state = AppState::empty();
        let completed = update_quest_progress(&mut state, QuestKind::CompleteSteps, 1, now());

        assert!(completed.is_empty());
        let daily = quest(&state, "daily_steps_3");
        assert_eq!(daily.requirement.current, 1);
        assert_eq!(daily.status, QuestStatus::InProgress);

        let weekly = quest(&state, "weekly_steps_15");
        assert_eq!(weekly.requirement.current, 1);

        // locked special quest counting the same kind is untouched
        let locked = quest(&state, "special_perfectionist");
        assert_eq!(locked.requirement.current, 0);
        assert_eq!(locked.status, QuestStatus::Locked);
    }

    #[test]
    fn test_completion_grants_xp_once() {
        let mut state = AppState::empty();
        for _ in 0..2 {
            update_quest_progress(&mut state, QuestKind::CompleteSteps, 1, now());
        }
        let completed = update_quest_progress(&mut state, QuestKind::CompleteSteps, 1, now());
        assert_eq!(completed, vec!["daily_steps_3".to_string()]);
        assert_eq!(state.total_xp, 50);

        let entry = state.activity_log.latest().unwrap();
        assert_eq!(entry.kind, ActivityKind::QuestCompleted);
        assert_eq!(entry.title, "Completed quest: Daily Learner");

        // terminal: more progress changes nothing on the completed quest
        let before = quest(&state, "daily_steps_3").clone();
        let again = update_quest_progress(&mut state, QuestKind::CompleteSteps, 1, now());
        assert!(again.is_empty());
        assert_eq!(quest(&state, "daily_steps_3"), &before);
        assert_eq!(state.total_xp, 50);
    }

    #[test]
    fn test_overshoot_completes() {
        let mut state = AppState::empty();
        let completed = update_quest_progress(&mut state, QuestKind::StudyMinutes, 45, now());

        assert_eq!(completed, vec!["daily_study_30".to_string()]);
        assert_eq!(quest(&state, "daily_study_30").requirement.current, 45);
        assert_eq!(quest(&state, "daily_study_30").completed_at, Some(now()));
    }

    #[test]
    fn test_zero_amount_keeps_available() {
        let mut state = AppState::empty();
        update_quest_progress(&mut state, QuestKind::CompleteSteps, 0, now());
        assert_eq!(quest(&state, "daily_steps_3").status, QuestStatus::Available);
    }

    #[test]
    fn test_daily_reset_leaves_weekly_alone() {
        let mut state = AppState::empty();
        update_quest_progress(&mut state, QuestKind::CompleteSteps, 3, now());
        assert_eq!(quest(&state, "daily_steps_3").status, QuestStatus::Completed);

        let reset = reset_daily_quests(&mut state);
        assert_eq!(reset, 3);

        let daily = quest(&state, "daily_steps_3");
        assert_eq!(daily.requirement.current, 0);
        assert_eq!(daily.status, QuestStatus::Available);
        assert!(daily.completed_at.is_none());

        let weekly = quest(&state, "weekly_steps_15");
        assert_eq!(weekly.requirement.current, 3);
        assert_eq!(weekly.status, QuestStatus::InProgress);
    }

    #[test]
    fn test_weekly_reset() {
        let mut state = AppState::empty();
        update_quest_progress(&mut state, QuestKind::CompleteSteps, 3, now());
        reset_weekly_quests(&mut state);

        assert_eq!(quest(&state, "weekly_steps_15").requirement.current, 0);
        assert_eq!(quest(&state, "daily_steps_3").status, QuestStatus::Completed);
    }

    #[test]
    fn test_unlock_quest() {
        let mut state = AppState::empty();
        assert!(unlock_quest(&mut state, "special_marathon"));
        assert_eq!(quest(&state, "special_marathon").status, QuestStatus::Available);

        assert!(!unlock_quest(&mut state, "special_marathon"));
        assert!(!unlock_quest(&mut state, "missing"));

        let completed = update_quest_progress(&mut state, QuestKind::StudyMinutes, 120, now());
        assert!(completed.contains(&"special_marathon".to_string()));
    }
}
