// ABOUTME: Dashboard statistics derived from the aggregate state
// ABOUTME: Totals, weekly and monthly activity series, category and roadmap breakdowns

use chrono::{Datelike, Duration, NaiveDate};
use learnpath_core::{level_from_xp, AppState, LevelInfo};
use serde::Serialize;
use tracing::debug;

use crate::aggregate::{
    completed_roadmap_count, completed_step_count, percentage, roadmap_progress, total_study_time,
};

/// Number of days in the trailing activity trend
pub const TREND_DAYS: i64 = 30;

/// Number of roadmaps shown in the progress ranking
pub const TOP_ROADMAPS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPoint {
    pub date: NaiveDate,
    pub steps: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category_id: String,
    pub name: String,
    pub total_steps: usize,
    pub completed_steps: usize,
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRank {
    pub roadmap_id: String,
    pub title: String,
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_roadmaps: usize,
    pub total_steps: usize,
    pub completed_steps: usize,
    pub completed_roadmaps: usize,
    pub total_study_minutes: u64,
    pub pomodoro_sessions: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub level: LevelInfo,
    pub unlocked_achievements: usize,
    pub completed_quests: usize,
    /// Monday of the current week through today
    pub this_week: Vec<DayPoint>,
    /// Oldest first, ending today
    pub last_30_days: Vec<DayPoint>,
    pub categories: Vec<CategoryBreakdown>,
    pub top_roadmaps: Vec<RoadmapRank>,
}

fn day_point(state: &AppState, date: NaiveDate) -> DayPoint {
    let activity = state.daily_activities.get(date);
    DayPoint {
        date,
        steps: activity.map_or(0, |a| a.steps_completed),
        minutes: activity.map_or(0, |a| a.pomodoro_minutes),
    }
}

fn series(state: &AppState, start: NaiveDate, end: NaiveDate) -> Vec<DayPoint> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| day_point(state, d))
        .collect()
}

/// Per-category step totals; categories without steps are omitted
pub fn category_breakdown(state: &AppState) -> Vec<CategoryBreakdown> {
    state
        .categories
        .iter()
        .filter_map(|category| {
            let (completed, total) = state
                .roadmaps
                .iter()
                .filter(|r| r.category_id == category.id)
                .fold((0, 0), |(done, all), r| {
                    (done + r.completed_steps(), all + r.steps.len())
                });
            if total == 0 {
                debug!("Category '{}' has no steps, omitted from breakdown", category.id);
                return None;
            }
            Some(CategoryBreakdown {
                category_id: category.id.clone(),
                name: category.name.clone(),
                total_steps: total,
                completed_steps: completed,
                progress: percentage(completed, total),
            })
        })
        .collect()
}

pub fn top_roadmaps(state: &AppState, limit: usize) -> Vec<RoadmapRank> {
    let mut ranked: Vec<_> = state
        .roadmaps
        .iter()
        .map(|r| RoadmapRank {
            roadmap_id: r.id.clone(),
            title: r.title.clone(),
            progress: roadmap_progress(r),
        })
        .collect();
    // stable sort keeps insertion order among equal progress
    ranked.sort_by(|a, b| b.progress.cmp(&a.progress));
    ranked.truncate(limit);
    ranked
}

pub fn compute_statistics(state: &AppState, today: NaiveDate) -> Statistics {
    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let trend_start = today - Duration::days(TREND_DAYS - 1);
    debug!(
        "Computing statistics for {} over {} roadmaps",
        today,
        state.roadmaps.len()
    );

    Statistics {
        total_roadmaps: state.roadmaps.len(),
        total_steps: state.roadmaps.iter().map(|r| r.steps.len()).sum(),
        completed_steps: completed_step_count(state),
        completed_roadmaps: completed_roadmap_count(state),
        total_study_minutes: total_study_time(state),
        pomodoro_sessions: state.pomodoro_sessions.len(),
        current_streak: state.current_streak,
        longest_streak: state.longest_streak,
        level: level_from_xp(state.total_xp),
        unlocked_achievements: state.achievements.iter().filter(|a| a.is_unlocked()).count(),
        completed_quests: state
            .quests
            .iter()
            .filter(|q| q.status == learnpath_core::QuestStatus::Completed)
            .count(),
        this_week: series(state, week_start, today),
        last_30_days: series(state, trend_start, today),
        categories: category_breakdown(state),
        top_roadmaps: top_roadmaps(state, TOP_ROADMAPS),
    }
}
