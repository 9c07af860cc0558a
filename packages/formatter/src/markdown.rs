// ABOUTME: Human-readable Markdown export of every roadmap
// ABOUTME: One-way format; not intended to be imported again

use learnpath_core::{AppState, ResourceType, Roadmap};
use learnpath_progress::roadmap_progress;
use std::fmt::Write;
use tracing::debug;

use crate::format_study_time;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Render all roadmaps as a Markdown document
pub fn export_markdown(state: &AppState) -> String {
    let mut out = String::from("# Learning Roadmaps\n\n");
    if state.roadmaps.is_empty() {
        debug!("No roadmaps to export, writing heading only");
    }
    for roadmap in &state.roadmaps {
        write_roadmap(&mut out, state, roadmap);
    }
    out
}

fn write_roadmap(out: &mut String, state: &AppState, roadmap: &Roadmap) {
    let category = state
        .category(&roadmap.category_id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED);

    // Writing to a String cannot fail
    let _ = writeln!(out, "## {}", roadmap.title);
    let _ = writeln!(out, "**Category:** {}", category);
    let _ = writeln!(out, "**Progress:** {}%", roadmap_progress(roadmap));
    let _ = writeln!(
        out,
        "**Study Time:** {}\n",
        format_study_time(u64::from(roadmap.total_study_time))
    );

    if let Some(description) = roadmap.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "{}\n", description);
    }

    out.push_str("### Steps\n");
    for step in &roadmap.steps {
        let mark = if step.completed { 'x' } else { ' ' };
        let _ = write!(out, "- [{}] {}", mark, step.title);
        if let Some(due) = step.due_date {
            let _ = write!(out, " (Due: {})", due.format("%Y-%m-%d"));
        }
        out.push('\n');

        for resource in &step.resources {
            match resource.resource_type {
                ResourceType::Link => {
                    let _ = writeln!(out, "  - [{}]({})", resource.title, resource.content);
                }
                ResourceType::File | ResourceType::Note => {
                    let _ = writeln!(out, "  - {}", resource.title);
                }
            }
        }
    }
    out.push_str("\n---\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};
    use learnpath_core::{Resource, Step};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        "2024-05-01T10:00:00Z".parse().unwrap()
    }

    fn resource(resource_type: ResourceType, title: &str, content: &str) -> Resource {
        Resource {
            id: "res-1".to_string(),
            resource_type,
            title: title.to_string(),
            content: content.to_string(),
            created_at: now(),
        }
    }

    #[test]
    fn test_export_document() {
        let mut state = AppState::empty();
        let mut roadmap = Roadmap::new("Rust", "programming", now());
        roadmap.description = Some("Systems programming".to_string());
        roadmap.total_study_time = 95;

        let mut done = Step::new("Ownership", now());
        done.set_completed(true, now());
        done.resources.push(resource(ResourceType::Link, "The Book", "https://doc.rust-lang.org/book/"));
        done.resources.push(resource(ResourceType::Note, "My notes", "borrowck"));

        let mut open = Step::new("Lifetimes", now());
        open.due_date = NaiveDate::from_ymd_opt(2024, 6, 1);

        roadmap.steps = vec![done, open];
        state.roadmaps.push(roadmap);

        let expected = "# Learning Roadmaps\n\n\
            ## Rust\n\
            **Category:** Programming\n\
            **Progress:** 50%\n\
            **Study Time:** 1h 35m\n\n\
            Systems programming\n\n\
            ### Steps\n\
            - [x] Ownership\n  \
            - [The Book](https://doc.rust-lang.org/book/)\n  \
            - My notes\n\
            - [ ] Lifetimes (Due: 2024-06-01)\n\
            \n---\n\n";
        assert_eq!(export_markdown(&state), expected);
    }

    #[test]
    fn test_dangling_category_is_uncategorized() {
        let mut state = AppState::empty();
        state.roadmaps.push(Roadmap::new("Orphan", "deleted", now()));

        let doc = export_markdown(&state);
        assert!(doc.contains("**Category:** Uncategorized\n"));
        assert!(doc.contains("**Progress:** 0%\n"));
        assert!(doc.contains("**Study Time:** 0h 0m\n"));
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(export_markdown(&AppState::empty()), "# Learning Roadmaps\n\n");
    }
}
