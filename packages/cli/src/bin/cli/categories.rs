use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use learnpath_cli::args::ColorArg;
use learnpath_core::{CategoryCreateInput, CategoryUpdateInput};
use learnpath_formatter::progress_bar;
use learnpath_progress::category_progress;
use learnpath_roadmaps::RoadmapStore;

use super::output::confirm;

#[derive(Subcommand)]
pub enum CategoriesCommands {
    /// List categories with their progress
    List,
    /// Add a category
    Add {
        name: String,
        #[arg(short, long, value_enum, default_value = "cyan")]
        color: ColorArg,
        #[arg(short, long, default_value = "📚")]
        icon: String,
    },
    /// Edit a category
    Edit {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, value_enum)]
        color: Option<ColorArg>,
        #[arg(short, long)]
        icon: Option<String>,
    },
    /// Delete a category; its roadmaps become uncategorized
    Delete {
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_categories_command(
    store: &RoadmapStore,
    command: CategoriesCommands,
) -> anyhow::Result<()> {
    match command {
        CategoriesCommands::List => list_categories(store).await,
        CategoriesCommands::Add { name, color, icon } => {
            let category = store
                .add_category(CategoryCreateInput {
                    name,
                    color: color.into(),
                    icon,
                })
                .await?;
            println!(
                "{}",
                format!("✅ Category '{} {}' created", category.icon, category.name).green()
            );
            println!("{} {}", "ID:".bold(), category.id);
            Ok(())
        }
        CategoriesCommands::Edit {
            id,
            name,
            color,
            icon,
        } => {
            let category = store
                .update_category(
                    &id,
                    CategoryUpdateInput {
                        name,
                        color: color.map(Into::into),
                        icon,
                    },
                )
                .await?;
            println!("{}", format!("✅ Category '{}' updated", category.name).green());
            Ok(())
        }
        CategoriesCommands::Delete { id, yes } => delete_category(store, &id, yes).await,
    }
}

async fn list_categories(store: &RoadmapStore) -> anyhow::Result<()> {
    let rows = store
        .read(|s| {
            s.categories
                .iter()
                .map(|c| {
                    let roadmaps = s.roadmaps.iter().filter(|r| r.category_id == c.id).count();
                    (c.clone(), roadmaps, category_progress(s, &c.id))
                })
                .collect::<Vec<_>>()
        })
        .await;

    if rows.is_empty() {
        println!("{}", "No categories found".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Category", "Color", "Roadmaps", "Progress"]);

    for (category, roadmaps, progress) in rows {
        table.add_row(vec![
            category.id,
            format!("{} {}", category.icon, category.name),
            format!("{:?}", category.color).to_lowercase(),
            roadmaps.to_string(),
            format!("{} {:>3}%", progress_bar(progress, 10), progress),
        ]);
    }

    println!("{}", "🏷️  Categories".blue().bold());
    println!();
    println!("{table}");
    Ok(())
}

async fn delete_category(store: &RoadmapStore, id: &str, yes: bool) -> anyhow::Result<()> {
    let Some((name, affected)) = store
        .read(|s| {
            s.category(id).map(|c| {
                (
                    c.name.clone(),
                    s.roadmaps.iter().filter(|r| r.category_id == id).count(),
                )
            })
        })
        .await
    else {
        anyhow::bail!("Category not found: {}", id);
    };

    let prompt = format!(
        "Delete category '{}'? {} roadmaps will become uncategorized",
        name, affected
    );
    if !confirm(&prompt, yes)? {
        println!("{}", "Deletion cancelled".yellow());
        return Ok(());
    }

    store.delete_category(id).await?;
    println!("{}", format!("✅ Category '{}' deleted", name).green());
    Ok(())
}
