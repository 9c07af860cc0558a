// ABOUTME: Output formatting for LearnPath
// ABOUTME: Markdown export, study time strings and terminal tables

use chrono::NaiveDate;

pub mod markdown;
pub mod tables;

pub use markdown::{export_markdown, UNCATEGORIZED};
pub use tables::{
    achievement_table, activity_table, due_table, progress_bar, quest_table, roadmap_table,
    template_table,
};

/// Export document flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    JsonGzip,
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::JsonGzip => "json.gz",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Minutes as `Xh Ym`
pub fn format_study_time(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// `learning-roadmaps-YYYY-MM-DD.<ext>`
pub fn export_file_name(format: ExportFormat, day: NaiveDate) -> String {
    format!(
        "learning-roadmaps-{}.{}",
        day.format("%Y-%m-%d"),
        format.extension()
    )
}
