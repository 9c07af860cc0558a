// ABOUTME: Progress aggregation and derived read-only queries
// ABOUTME: Completion ratios, due-date lists, dashboard statistics and motivation tiers

pub mod aggregate;
pub mod motivation;
pub mod schedule;
pub mod statistics;

pub use aggregate::{
    category_progress, completed_roadmap_count, completed_step_count, overall_progress,
    percentage, roadmap_progress, step_completion_ratio, total_study_time,
};
pub use motivation::{motivational_message, MotivationTier};
pub use schedule::{due_soon_count, overdue_steps, upcoming_steps, DueStep};
pub use statistics::{
    category_breakdown, compute_statistics, top_roadmaps, CategoryBreakdown, DayPoint,
    RoadmapRank, Statistics,
};
