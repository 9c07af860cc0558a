use clap::Subcommand;
use colored::*;
use learnpath_formatter::template_table;
use learnpath_roadmaps::RoadmapStore;

#[derive(Subcommand)]
pub enum TemplatesCommands {
    /// Search the template library
    Search {
        /// Matches title, description and tags
        #[arg(default_value = "")]
        query: String,
        /// Only templates in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Create a roadmap from a template
    Use { template_id: String },
}

pub async fn handle_templates_command(
    store: &RoadmapStore,
    command: TemplatesCommands,
) -> anyhow::Result<()> {
    match command {
        TemplatesCommands::Search { query, category } => {
            let templates = store.search_templates(&query, category.as_deref());
            if templates.is_empty() {
                println!("{}", "No templates match your search".yellow());
                return Ok(());
            }
            println!("{}", "📚 Roadmap Templates".blue().bold());
            println!();
            println!("{}", template_table(&templates));
            println!();
            println!(
                "{}",
                "Use 'learnpath templates use <ID>' to start one".dimmed()
            );
        }
        TemplatesCommands::Use { template_id } => {
            let roadmap = store.add_roadmap_from_template(&template_id).await?;
            println!(
                "{}",
                format!(
                    "✅ Roadmap '{}' created with {} steps",
                    roadmap.title,
                    roadmap.steps.len()
                )
                .green()
            );
            println!("{} {}", "ID:".bold(), roadmap.id);
        }
    }
    Ok(())
}
