use clap::Subcommand;
use colored::*;
use learnpath_core::QuestType;
use learnpath_formatter::quest_table;
use learnpath_roadmaps::RoadmapStore;

#[derive(Subcommand)]
pub enum QuestsCommands {
    /// List quests grouped by type
    List,
    /// Restart every daily quest from zero
    ResetDaily,
    /// Restart every weekly quest from zero
    ResetWeekly,
    /// Make a locked quest available
    Unlock { quest_id: String },
}

pub async fn handle_quests_command(
    store: &RoadmapStore,
    command: QuestsCommands,
) -> anyhow::Result<()> {
    match command {
        QuestsCommands::List => {
            let quests = store.read(|s| s.quests.clone()).await;
            for (heading, quest_type) in [
                ("☀️  Daily Quests", QuestType::Daily),
                ("📅 Weekly Quests", QuestType::Weekly),
                ("⭐ Special Quests", QuestType::Special),
            ] {
                let group: Vec<_> = quests
                    .iter()
                    .filter(|q| q.quest_type == quest_type)
                    .cloned()
                    .collect();
                if group.is_empty() {
                    continue;
                }
                println!("{}", heading.blue().bold());
                println!("{}", quest_table(&group));
                println!();
            }
        }
        QuestsCommands::ResetDaily => {
            let reset = store.reset_daily_quests().await;
            println!("{}", format!("✅ Reset {} daily quests", reset).green());
        }
        QuestsCommands::ResetWeekly => {
            let reset = store.reset_weekly_quests().await;
            println!("{}", format!("✅ Reset {} weekly quests", reset).green());
        }
        QuestsCommands::Unlock { quest_id } => {
            if store.unlock_quest(&quest_id).await {
                println!("{}", format!("✅ Quest '{}' unlocked", quest_id).green());
            } else {
                anyhow::bail!("Quest '{}' is not locked or does not exist", quest_id);
            }
        }
    }
    Ok(())
}
