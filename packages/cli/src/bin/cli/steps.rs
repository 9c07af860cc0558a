use chrono::NaiveDate;
use clap::Subcommand;
use colored::*;
use learnpath_cli::args::{parse_date, ResourceKindArg};
use learnpath_core::{ResourceCreateInput, StepCreateInput, StepUpdateInput};
use learnpath_roadmaps::RoadmapStore;

use super::output::print_rewards;

#[derive(Subcommand)]
pub enum StepsCommands {
    /// Add a step to a roadmap
    Add {
        roadmap_id: String,
        title: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
    },
    /// Edit a step
    Edit {
        roadmap_id: String,
        step_id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long, conflicts_with = "clear_description")]
        description: Option<String>,
        #[arg(long)]
        clear_description: bool,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, conflicts_with = "clear_due")]
        due: Option<NaiveDate>,
        #[arg(long)]
        clear_due: bool,
    },
    /// Mark a step done, or undo it
    Toggle { roadmap_id: String, step_id: String },
    /// Delete a step
    Delete { roadmap_id: String, step_id: String },
    /// Attach a link, file reference or note to a step
    AddResource {
        roadmap_id: String,
        step_id: String,
        /// Resource title
        title: String,
        /// URL, filename or note text
        content: String,
        #[arg(short, long, value_enum, default_value = "link")]
        kind: ResourceKindArg,
    },
    /// Remove a resource from a step
    RemoveResource {
        roadmap_id: String,
        step_id: String,
        resource_id: String,
    },
}

fn clearable<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

pub async fn handle_steps_command(store: &RoadmapStore, command: StepsCommands) -> anyhow::Result<()> {
    match command {
        StepsCommands::Add {
            roadmap_id,
            title,
            description,
            due,
        } => {
            let step = store
                .add_step(
                    &roadmap_id,
                    StepCreateInput {
                        title,
                        description,
                        due_date: due,
                    },
                )
                .await?;
            println!("{}", format!("✅ Step '{}' added", step.title).green());
            println!("{} {}", "ID:".bold(), step.id);
        }
        StepsCommands::Edit {
            roadmap_id,
            step_id,
            title,
            description,
            clear_description,
            due,
            clear_due,
        } => {
            let input = StepUpdateInput {
                title,
                description: clearable(description, clear_description),
                due_date: clearable(due, clear_due),
            };
            let step = store.update_step(&roadmap_id, &step_id, input).await?;
            println!("{}", format!("✅ Step '{}' updated", step.title).green());
        }
        StepsCommands::Toggle {
            roadmap_id,
            step_id,
        } => {
            let outcome = store.toggle_step(&roadmap_id, &step_id).await?;
            if outcome.value.completed {
                println!("{}", format!("✅ Completed '{}'", outcome.value.title).green());
            } else {
                println!("{}", format!("↩️  '{}' marked as not done", outcome.value.title).yellow());
            }
            print_rewards(store, outcome.xp_awarded, outcome.report.as_ref()).await;

            if let Some(progress) = store.roadmap_progress(&roadmap_id).await {
                println!("{}", format!("Roadmap progress: {}%", progress).dimmed());
            }
        }
        StepsCommands::Delete {
            roadmap_id,
            step_id,
        } => {
            let step = store.delete_step(&roadmap_id, &step_id).await?;
            println!("{}", format!("✅ Step '{}' deleted", step.title).green());
        }
        StepsCommands::AddResource {
            roadmap_id,
            step_id,
            title,
            content,
            kind,
        } => {
            let resource = store
                .add_resource(
                    &roadmap_id,
                    &step_id,
                    ResourceCreateInput {
                        resource_type: kind.into(),
                        title,
                        content,
                    },
                )
                .await?;
            println!("{}", format!("✅ Resource '{}' added", resource.title).green());
            println!("{} {}", "ID:".bold(), resource.id);
        }
        StepsCommands::RemoveResource {
            roadmap_id,
            step_id,
            resource_id,
        } => {
            let resource = store
                .remove_resource(&roadmap_id, &step_id, &resource_id)
                .await?;
            println!("{}", format!("✅ Resource '{}' removed", resource.title).green());
        }
    }
    Ok(())
}
