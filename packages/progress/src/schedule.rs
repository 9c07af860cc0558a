// ABOUTME: Due-date queries over uncompleted steps
// ABOUTME: Upcoming and overdue lists plus the notification badge count

use chrono::{Duration, NaiveDate};
use learnpath_core::{AppState, Step};
use serde::Serialize;

/// A step with a due date, paired with the roadmap it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DueStep<'a> {
    pub roadmap_id: &'a str,
    pub roadmap_title: &'a str,
    pub step: &'a Step,
    pub due_date: NaiveDate,
}

fn open_due_steps(state: &AppState) -> impl Iterator<Item = DueStep<'_>> {
    state.roadmaps.iter().flat_map(|roadmap| {
        roadmap.steps.iter().filter_map(move |step| match step.due_date {
            Some(due_date) if !step.completed => Some(DueStep {
                roadmap_id: &roadmap.id,
                roadmap_title: &roadmap.title,
                step,
                due_date,
            }),
            _ => None,
        })
    })
}

/// Uncompleted steps due today or later, soonest first
pub fn upcoming_steps(state: &AppState, today: NaiveDate) -> Vec<DueStep<'_>> {
    let mut upcoming: Vec<_> = open_due_steps(state)
        .filter(|d| d.due_date >= today)
        .collect();
    upcoming.sort_by_key(|d| d.due_date);
    upcoming
}

/// Uncompleted steps whose due date has passed, most overdue first
pub fn overdue_steps(state: &AppState, today: NaiveDate) -> Vec<DueStep<'_>> {
    let mut overdue: Vec<_> = open_due_steps(state)
        .filter(|d| d.due_date < today)
        .collect();
    overdue.sort_by_key(|d| d.due_date);
    overdue
}

/// Overdue steps plus those due today or tomorrow
pub fn due_soon_count(state: &AppState, today: NaiveDate) -> usize {
    let tomorrow = today + Duration::days(1);
    open_due_steps(state)
        .filter(|d| d.due_date <= tomorrow)
        .count()
}
