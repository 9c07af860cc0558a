pub mod categories;
pub mod data;
pub mod output;
pub mod progress;
pub mod quests;
pub mod roadmaps;
pub mod settings;
pub mod steps;
pub mod templates;
