// ABOUTME: Roadmap state store for LearnPath
// ABOUTME: Action API over the single application state, templates, import and export

pub mod error;
pub mod store;
pub mod templates;
pub mod types;

pub use error::{ImportError, StoreError, StoreResult};
pub use store::RoadmapStore;
pub use templates::{find_template, roadmap_from_template, search_templates};
pub use types::{ActionOutcome, ImportSummary, PomodoroInput, ScheduledStep};
