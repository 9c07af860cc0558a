use clap::Subcommand;
use colored::*;
use learnpath_cli::args::ThemeArg;
use learnpath_roadmaps::RoadmapStore;
use learnpath_settings::{AppearanceUpdate, ProfileUpdate, SettingsUpdate};

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print current settings as JSON
    Show,
    /// Update profile fields
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Change the color theme
    Theme {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

pub async fn handle_settings_command(
    store: &RoadmapStore,
    command: SettingsCommands,
) -> anyhow::Result<()> {
    match command {
        SettingsCommands::Show => {
            let settings = store.read(|s| s.settings.clone()).await;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsCommands::Profile {
            name,
            email,
            avatar,
            bio,
        } => {
            let update = SettingsUpdate {
                profile: Some(ProfileUpdate {
                    display_name: name,
                    email,
                    avatar,
                    bio,
                }),
                ..Default::default()
            };
            let settings = store.update_settings(update).await?;
            println!(
                "{}",
                format!(
                    "✅ Profile saved for {} {}",
                    settings.profile.avatar, settings.profile.display_name
                )
                .green()
            );
        }
        SettingsCommands::Theme { theme } => {
            let update = SettingsUpdate {
                appearance: Some(AppearanceUpdate {
                    theme: Some(theme.into()),
                    ..Default::default()
                }),
                ..Default::default()
            };
            let settings = store.update_settings(update).await?;
            println!(
                "{}",
                format!("✅ Theme set to {:?}", settings.appearance.theme).green()
            );
        }
    }
    Ok(())
}
