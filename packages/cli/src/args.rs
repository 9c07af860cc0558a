// ABOUTME: Command-line value types and their mapping onto domain types
// ABOUTME: Colors, resource kinds, themes, export kinds and date parsing

use chrono::NaiveDate;
use clap::ValueEnum;
use learnpath_core::{ActivityKind, CategoryColor, ResourceType, Theme};
use learnpath_formatter::ExportFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Green,
    Cyan,
    Yellow,
    Orange,
    Purple,
    Pink,
}

impl From<ColorArg> for CategoryColor {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Green => CategoryColor::Green,
            ColorArg::Cyan => CategoryColor::Cyan,
            ColorArg::Yellow => CategoryColor::Yellow,
            ColorArg::Orange => CategoryColor::Orange,
            ColorArg::Purple => CategoryColor::Purple,
            ColorArg::Pink => CategoryColor::Pink,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKindArg {
    Link,
    File,
    Note,
}

impl From<ResourceKindArg> for ResourceType {
    fn from(kind: ResourceKindArg) -> Self {
        match kind {
            ResourceKindArg::Link => ResourceType::Link,
            ResourceKindArg::File => ResourceType::File,
            ResourceKindArg::Note => ResourceType::Note,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
    System,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
            ThemeArg::System => Theme::System,
        }
    }
}

/// Sources of directly granted XP
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum XpSourceArg {
    Quiz,
    Course,
}

impl From<XpSourceArg> for ActivityKind {
    fn from(source: XpSourceArg) -> Self {
        match source {
            XpSourceArg::Quiz => ActivityKind::QuizCompleted,
            XpSourceArg::Course => ActivityKind::CourseCompleted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    /// Full JSON snapshot
    Json,
    /// JSON snapshot, gzip-compressed when backups are compressed
    Backup,
    /// Human-readable markdown document
    Markdown,
}

impl ExportKind {
    pub fn format(self, compress: bool) -> ExportFormat {
        match self {
            ExportKind::Json => ExportFormat::Json,
            ExportKind::Backup if compress => ExportFormat::JsonGzip,
            ExportKind::Backup => ExportFormat::Json,
            ExportKind::Markdown => ExportFormat::Markdown,
        }
    }
}

/// clap value parser for `YYYY-MM-DD` dates
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("expected a YYYY-MM-DD date, got '{}'", value))
}
