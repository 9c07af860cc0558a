// ABOUTME: Shared terminal output helpers for learnpath commands
// ABOUTME: Reports XP, streak changes, quests and achievements after an action

use colored::*;
use learnpath_gamification::{PipelineReport, StreakChange};
use learnpath_roadmaps::RoadmapStore;

/// Print what an action earned: XP, streak news, finished quests and new badges
pub async fn print_rewards(store: &RoadmapStore, xp_awarded: u64, report: Option<&PipelineReport>) {
    if xp_awarded > 0 {
        println!("{}", format!("✨ +{} XP", xp_awarded).yellow().bold());
    }

    let Some(report) = report else {
        return;
    };

    let streak = store.read(|s| s.current_streak).await;
    match report.streak {
        Some(StreakChange::Extended) => {
            println!("{}", format!("🔥 Streak extended to {} days", streak).yellow());
        }
        Some(StreakChange::Started) => {
            println!("{}", "🔥 New streak started".yellow());
        }
        _ => {}
    }

    let (quests, achievements) = store
        .read(|s| {
            let quests: Vec<_> = s
                .quests
                .iter()
                .filter(|q| report.completed_quests.contains(&q.id))
                .map(|q| (q.title.clone(), q.xp))
                .collect();
            let achievements: Vec<_> = s
                .achievements
                .iter()
                .filter(|a| report.unlocked_achievements.contains(&a.id))
                .map(|a| (format!("{} {}", a.icon, a.name), a.xp))
                .collect();
            (quests, achievements)
        })
        .await;

    for (title, xp) in quests {
        println!("{}", format!("🎯 Quest complete: {} (+{} XP)", title, xp).green());
    }
    for (name, xp) in achievements {
        println!("{}", format!("🏆 Achievement unlocked: {} (+{} XP)", name, xp).green().bold());
    }
}

/// Ask before a destructive action unless `yes` was passed
pub fn confirm(prompt: &str, yes: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    Ok(inquire::Confirm::new(prompt).with_default(false).prompt()?)
}
