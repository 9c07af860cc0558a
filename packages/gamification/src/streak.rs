// ABOUTME: Consecutive-day activity streak tracking
// ABOUTME: Calendar-day granular; repeated activity on one day counts once

use chrono::NaiveDate;
use learnpath_core::{days_between, AppState};
use serde::Serialize;
use tracing::{debug, info};

/// What an activity event did to the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// Already active today
    Unchanged,
    /// Active yesterday; streak grew by one
    Extended,
    /// First activity ever, after a gap, or after a clock moved backwards
    Started,
}

impl StreakChange {
    /// True on the first qualifying action of a calendar day
    pub fn is_new_day(&self) -> bool {
        !matches!(self, StreakChange::Unchanged)
    }
}

/// Record that activity happened on `today`
pub fn record_activity(state: &mut AppState, today: NaiveDate) -> StreakChange {
    let change = match state.last_active_date {
        Some(last) if last == today => {
            debug!("Streak already counted for {}", today);
            return StreakChange::Unchanged;
        }
        Some(last) if days_between(last, today) == 1 => {
            state.current_streak += 1;
            StreakChange::Extended
        }
        _ => {
            state.current_streak = 1;
            StreakChange::Started
        }
    };

    state.longest_streak = state.longest_streak.max(state.current_streak);
    state.last_active_date = Some(today);

    info!(
        "Streak {:?}: current {}, longest {}",
        change, state.current_streak, state.longest_streak
    );
    change
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_first_activity_starts_streak() {
        let mut state = AppState::empty();
        assert_eq!(record_activity(&mut state, day(1)), StreakChange::Started);
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 1);
        assert_eq!(state.last_active_date, Some(day(1)));
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let mut state = AppState::empty();
        record_activity(&mut state, day(1));
        assert_eq!(record_activity(&mut state, day(1)), StreakChange::Unchanged);
        assert_eq!(state.current_streak, 1);
    }

    #[test]
    fn test_consecutive_days_extend() {
        let mut state = AppState::empty();
        for d in 1..=4 {
            record_activity(&mut state, day(d));
        }
        assert_eq!(state.current_streak, 4);
        assert_eq!(state.longest_streak, 4);
    }

    #[test]
    fn test_gap_resets_but_longest_is_kept() {
        let mut state = AppState::empty();
        for d in 1..=3 {
            record_activity(&mut state, day(d));
        }
        assert_eq!(record_activity(&mut state, day(6)), StreakChange::Started);
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 3);

        record_activity(&mut state, day(7));
        assert_eq!(state.current_streak, 2);
        assert_eq!(state.longest_streak, 3);
    }

    #[test]
    fn test_month_boundary_counts_as_consecutive() {
        let mut state = AppState::empty();
        record_activity(&mut state, NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
        assert_eq!(record_activity(&mut state, day(1)), StreakChange::Extended);
        assert_eq!(state.current_streak, 2);
    }

    #[test]
    fn test_backwards_date_restarts() {
        let mut state = AppState::empty();
        record_activity(&mut state, day(5));
        record_activity(&mut state, day(6));
        assert_eq!(record_activity(&mut state, day(2)), StreakChange::Started);
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 2);
    }
}
