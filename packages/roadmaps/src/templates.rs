// ABOUTME: Official roadmap template catalog queries
// ABOUTME: Search by text and category, and instantiate a template as a fresh roadmap

use chrono::{DateTime, Utc};
use learnpath_core::catalog::roadmap_templates;
use learnpath_core::{Roadmap, RoadmapTemplate, Step};

/// Templates matching `query` (case-insensitive, against title, description and tags)
/// and, when given, `category`. An empty query matches everything.
pub fn search_templates(query: &str, category: Option<&str>) -> Vec<RoadmapTemplate> {
    let needle = query.trim().to_lowercase();
    roadmap_templates()
        .into_iter()
        .filter(|t| category.map_or(true, |c| t.category_id == c))
        .filter(|t| {
            needle.is_empty()
                || t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
                || t.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

pub fn find_template(template_id: &str) -> Option<RoadmapTemplate> {
    roadmap_templates().into_iter().find(|t| t.id == template_id)
}

/// New roadmap with uncompleted steps and no study time
pub fn roadmap_from_template(template: &RoadmapTemplate, now: DateTime<Utc>) -> Roadmap {
    let mut roadmap = Roadmap::new(template.title.clone(), template.category_id.clone(), now);
    roadmap.description = Some(template.description.clone());
    roadmap.steps = template
        .steps
        .iter()
        .map(|title| Step::new(title.clone(), now))
        .collect();
    roadmap
}
