// ABOUTME: Terminal tables for roadmaps, quests, achievements and activity
// ABOUTME: Built with comfy-table using rounded UTF-8 borders

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use learnpath_core::{
    Achievement, ActivityLogEntry, AppState, Quest, QuestStatus, RoadmapTemplate,
};
use learnpath_progress::{roadmap_progress, DueStep};

use crate::format_study_time;
use crate::markdown::UNCATEGORIZED;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Text progress bar, `width` cells wide
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn roadmap_table(state: &AppState) -> Table {
    let mut table = new_table(vec!["ID", "Title", "Category", "Steps", "Progress", "Study Time"]);
    for roadmap in &state.roadmaps {
        let category = state
            .category(&roadmap.category_id)
            .map(|c| format!("{} {}", c.icon, c.name))
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        let progress = roadmap_progress(roadmap);

        table.add_row(vec![
            roadmap.id.clone(),
            roadmap.title.clone(),
            category,
            format!("{}/{}", roadmap.completed_steps(), roadmap.steps.len()),
            format!("{} {:>3}%", progress_bar(progress, 10), progress),
            format_study_time(u64::from(roadmap.total_study_time)),
        ]);
    }
    table
}

pub fn due_table(steps: &[DueStep<'_>]) -> Table {
    let mut table = new_table(vec!["Due", "Step", "Roadmap"]);
    for due in steps {
        table.add_row(vec![
            due.due_date.format("%Y-%m-%d").to_string(),
            due.step.title.clone(),
            due.roadmap_title.to_string(),
        ]);
    }
    table
}

pub fn quest_table(quests: &[Quest]) -> Table {
    let mut table = new_table(vec!["ID", "Quest", "Type", "Progress", "Status", "XP"]);
    for quest in quests {
        let status = match quest.status {
            QuestStatus::Locked => "locked",
            QuestStatus::Available => "available",
            QuestStatus::InProgress => "in progress",
            QuestStatus::Completed => "completed",
        };
        table.add_row(vec![
            quest.id.clone(),
            quest.title.clone(),
            format!("{:?}", quest.quest_type).to_lowercase(),
            format!(
                "{}/{}",
                quest.requirement.current.min(quest.requirement.value),
                quest.requirement.value
            ),
            status.to_string(),
            quest.xp.to_string(),
        ]);
    }
    table
}

pub fn achievement_table(achievements: &[Achievement]) -> Table {
    let mut table = new_table(vec!["", "Achievement", "Description", "Progress", "XP"]);
    for achievement in achievements {
        let progress = match achievement.unlocked_at {
            Some(at) => format!("unlocked {}", at.format("%Y-%m-%d")),
            None => format!("{} {:>3}%", progress_bar(achievement.progress, 10), achievement.progress),
        };
        table.add_row(vec![
            achievement.icon.clone(),
            achievement.name.clone(),
            achievement.description.clone(),
            progress,
            achievement.xp.to_string(),
        ]);
    }
    table
}

pub fn activity_table<'a>(entries: impl IntoIterator<Item = &'a ActivityLogEntry>) -> Table {
    let mut table = new_table(vec!["When", "Activity", "Details", "XP"]);
    for entry in entries {
        table.add_row(vec![
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            entry.title.clone(),
            entry.description.clone(),
            format!("+{}", entry.xp),
        ]);
    }
    table
}

pub fn template_table(templates: &[RoadmapTemplate]) -> Table {
    let mut table = new_table(vec!["ID", "Template", "Category", "Steps", "Rating", "Tags"]);
    for template in templates {
        table.add_row(vec![
            template.id.clone(),
            template.title.clone(),
            template.category_id.clone(),
            template.steps.len().to_string(),
            format!("{:.1}", template.rating),
            template.tags.join(", "),
        ]);
    }
    table
}
