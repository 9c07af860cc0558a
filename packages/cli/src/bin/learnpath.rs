use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::categories::CategoriesCommands;
use cli::data::{ExportArgs, ImportArgs};
use cli::progress::{ActivityArgs, PomodoroArgs, XpArgs};
use cli::quests::QuestsCommands;
use cli::roadmaps::RoadmapsCommands;
use cli::settings::SettingsCommands;
use cli::steps::StepsCommands;
use cli::templates::TemplatesCommands;
use learnpath_cli::{init_logging, open_store, Config};

#[derive(Parser)]
#[command(name = "learnpath")]
#[command(about = "LearnPath - gamified learning roadmaps")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Level, streak, progress and what is due
    Status,
    /// Manage learning roadmaps
    #[command(subcommand)]
    Roadmaps(RoadmapsCommands),
    /// Manage steps and their resources
    #[command(subcommand)]
    Steps(StepsCommands),
    /// Manage categories
    #[command(subcommand)]
    Categories(CategoriesCommands),
    /// Browse and use roadmap templates
    #[command(subcommand)]
    Templates(TemplatesCommands),
    /// Record a finished pomodoro session
    Pomodoro(PomodoroArgs),
    /// List steps that are due or overdue
    Due,
    /// Show quests and manage quest resets
    #[command(subcommand)]
    Quests(QuestsCommands),
    /// Show achievements and their progress
    Achievements,
    /// Show the recent activity feed
    Activity(ActivityArgs),
    /// Show learning statistics
    Stats,
    /// Grant XP for a quiz or course finished elsewhere
    Xp(XpArgs),
    /// View and change user settings
    #[command(subcommand)]
    Settings(SettingsCommands),
    /// Export roadmaps as JSON, a backup or markdown
    Export(ExportArgs),
    /// Replace all data with an exported JSON snapshot
    Import(ImportArgs),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };
    init_logging(&config.log_filter);

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await;

    match command {
        Commands::Status => cli::progress::show_status(&store).await,
        Commands::Roadmaps(command) => cli::roadmaps::handle_roadmaps_command(&store, command).await,
        Commands::Steps(command) => cli::steps::handle_steps_command(&store, command).await,
        Commands::Categories(command) => {
            cli::categories::handle_categories_command(&store, command).await
        }
        Commands::Templates(command) => {
            cli::templates::handle_templates_command(&store, command).await
        }
        Commands::Pomodoro(args) => cli::progress::record_pomodoro(&store, args).await,
        Commands::Due => cli::progress::show_due(&store).await,
        Commands::Quests(command) => cli::quests::handle_quests_command(&store, command).await,
        Commands::Achievements => cli::progress::show_achievements(&store).await,
        Commands::Activity(args) => cli::progress::show_activity(&store, args).await,
        Commands::Stats => cli::progress::show_stats(&store).await,
        Commands::Xp(args) => cli::progress::grant_xp(&store, args).await,
        Commands::Settings(command) => cli::settings::handle_settings_command(&store, command).await,
        Commands::Export(args) => cli::data::export(&store, config, args).await,
        Commands::Import(args) => cli::data::import(&store, args).await,
    }
}
