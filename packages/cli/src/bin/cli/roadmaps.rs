use clap::Subcommand;
use colored::*;
use learnpath_core::{ResourceType, RoadmapCreateInput, RoadmapUpdateInput, StepCreateInput};
use learnpath_formatter::{format_study_time, progress_bar, roadmap_table, UNCATEGORIZED};
use learnpath_roadmaps::RoadmapStore;

use super::output::confirm;

#[derive(Subcommand)]
pub enum RoadmapsCommands {
    /// List all roadmaps
    List,
    /// Show roadmap details with its steps
    Show {
        /// Roadmap ID to show
        id: String,
    },
    /// Add a new roadmap
    Add {
        /// Roadmap title
        title: String,
        /// Roadmap description
        #[arg(short, long)]
        description: Option<String>,
        /// Category ID
        #[arg(short, long)]
        category: Option<String>,
        /// Initial step title (repeatable)
        #[arg(short, long = "step")]
        steps: Vec<String>,
    },
    /// Edit an existing roadmap
    Edit {
        /// Roadmap ID to edit
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the description
        #[arg(long)]
        clear_description: bool,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a roadmap
    Delete {
        /// Roadmap ID to delete
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_roadmaps_command(
    store: &RoadmapStore,
    command: RoadmapsCommands,
) -> anyhow::Result<()> {
    match command {
        RoadmapsCommands::List => list_roadmaps(store).await,
        RoadmapsCommands::Show { id } => show_roadmap(store, &id).await,
        RoadmapsCommands::Add {
            title,
            description,
            category,
            steps,
        } => add_roadmap(store, title, description, category, steps).await,
        RoadmapsCommands::Edit {
            id,
            title,
            description,
            clear_description,
            category,
        } => {
            let description = if clear_description {
                Some(None)
            } else {
                description.map(Some)
            };
            edit_roadmap(
                store,
                &id,
                RoadmapUpdateInput {
                    title,
                    description,
                    category_id: category,
                },
            )
            .await
        }
        RoadmapsCommands::Delete { id, yes } => delete_roadmap(store, &id, yes).await,
    }
}

async fn list_roadmaps(store: &RoadmapStore) -> anyhow::Result<()> {
    let (count, table) = store.read(|s| (s.roadmaps.len(), roadmap_table(s))).await;

    if count == 0 {
        println!("{}", "No roadmaps found".yellow());
        println!(
            "{}",
            "Use 'learnpath roadmaps add' or 'learnpath templates use' to create one".dimmed()
        );
        return Ok(());
    }

    println!("{}", "🗺️  Learning Roadmaps".blue().bold());
    println!();
    println!("{table}");
    println!();
    println!(
        "{}",
        format!("Overall progress: {}%", store.overall_progress().await).dimmed()
    );
    Ok(())
}

async fn show_roadmap(store: &RoadmapStore, id: &str) -> anyhow::Result<()> {
    let Some(roadmap) = store.roadmap(id).await else {
        anyhow::bail!("Roadmap not found: {}", id);
    };
    let category = store
        .read(|s| {
            s.category(&roadmap.category_id)
                .map(|c| format!("{} {}", c.icon, c.name))
        })
        .await
        .unwrap_or_else(|| UNCATEGORIZED.to_string());
    let progress = store.roadmap_progress(id).await.unwrap_or(0);

    println!("{}", roadmap.title.blue().bold());
    if let Some(description) = &roadmap.description {
        println!("{}", description.dimmed());
    }
    println!();
    println!("{} {}", "ID:".bold(), roadmap.id);
    println!("{} {}", "Category:".bold(), category);
    println!(
        "{} {} {}% ({}/{} steps)",
        "Progress:".bold(),
        progress_bar(progress, 20),
        progress,
        roadmap.completed_steps(),
        roadmap.steps.len()
    );
    println!(
        "{} {}",
        "Study time:".bold(),
        format_study_time(u64::from(roadmap.total_study_time))
    );
    println!(
        "{} {}",
        "Updated:".bold(),
        roadmap.updated_at.format("%Y-%m-%d %H:%M")
    );
    println!();

    if roadmap.steps.is_empty() {
        println!("{}", "No steps yet".yellow());
        return Ok(());
    }

    for step in &roadmap.steps {
        let marker = if step.completed {
            "✓".green().to_string()
        } else {
            "○".dimmed().to_string()
        };
        let due = step
            .due_date
            .map(|d| format!(" (due {})", d.format("%Y-%m-%d")))
            .unwrap_or_default();
        println!("{} {}{} {}", marker, step.title, due.yellow(), step.id.dimmed());

        for resource in &step.resources {
            let icon = match resource.resource_type {
                ResourceType::Link => "🔗",
                ResourceType::File => "📄",
                ResourceType::Note => "📝",
            };
            println!(
                "    {} {} {} {}",
                icon,
                resource.title,
                resource.content.dimmed(),
                resource.id.dimmed()
            );
        }
    }
    Ok(())
}

async fn add_roadmap(
    store: &RoadmapStore,
    title: String,
    description: Option<String>,
    category: Option<String>,
    steps: Vec<String>,
) -> anyhow::Result<()> {
    let input = RoadmapCreateInput {
        title,
        description,
        category_id: category,
        steps: steps
            .into_iter()
            .map(|title| StepCreateInput {
                title,
                ..Default::default()
            })
            .collect(),
    };

    let roadmap = store.add_roadmap(input).await?;
    println!(
        "{}",
        format!("✅ Roadmap '{}' created with {} steps", roadmap.title, roadmap.steps.len())
            .green()
    );
    println!("{} {}", "ID:".bold(), roadmap.id);
    Ok(())
}

async fn edit_roadmap(
    store: &RoadmapStore,
    id: &str,
    input: RoadmapUpdateInput,
) -> anyhow::Result<()> {
    let roadmap = store.update_roadmap(id, input).await?;
    println!("{}", format!("✅ Roadmap '{}' updated", roadmap.title).green());
    Ok(())
}

async fn delete_roadmap(store: &RoadmapStore, id: &str, yes: bool) -> anyhow::Result<()> {
    let Some(roadmap) = store.roadmap(id).await else {
        anyhow::bail!("Roadmap not found: {}", id);
    };

    let prompt = format!(
        "Delete '{}' and its {} steps?",
        roadmap.title,
        roadmap.steps.len()
    );
    if !confirm(&prompt, yes)? {
        println!("{}", "Deletion cancelled".yellow());
        return Ok(());
    }

    store.delete_roadmap(id).await?;
    println!("{}", format!("✅ Roadmap '{}' deleted", roadmap.title).green());
    Ok(())
}
