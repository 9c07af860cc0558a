// ABOUTME: Progress, study and reward commands
// ABOUTME: Status dashboard, statistics, due dates, pomodoro sessions and XP grants

use chrono::{Duration, Utc};
use clap::Args;
use colored::*;
use learnpath_cli::args::XpSourceArg;
use learnpath_formatter::{
    achievement_table, activity_table, due_table, format_study_time, progress_bar,
};
use learnpath_progress::{overdue_steps, upcoming_steps, MotivationTier};
use learnpath_roadmaps::{PomodoroInput, RoadmapStore};

const DEFAULT_POMODORO_MINUTES: u32 = 25;

#[derive(Args)]
pub struct PomodoroArgs {
    /// Roadmap the session counts towards
    pub roadmap_id: String,
    /// Focused minutes
    #[arg(short, long, default_value_t = DEFAULT_POMODORO_MINUTES)]
    pub minutes: u32,
    /// The timer was stopped before it finished
    #[arg(long)]
    pub abandoned: bool,
}

#[derive(Args)]
pub struct ActivityArgs {
    /// Number of entries to show
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Args)]
pub struct XpArgs {
    /// XP to grant
    pub amount: u64,
    /// What was finished
    pub reason: String,
    #[arg(short, long, value_enum, default_value = "quiz")]
    pub source: XpSourceArg,
    /// Related roadmap or external ID
    #[arg(long)]
    pub related: Option<String>,
}

pub async fn show_status(store: &RoadmapStore) -> anyhow::Result<()> {
    let level = store.level().await;
    let overall = store.overall_progress().await;
    let due_soon = store.due_soon_count().await;
    let overdue = store.overdue_steps().await.len();
    let (name, avatar, streak, longest) = store
        .read(|s| {
            (
                s.settings.profile.display_name.clone(),
                s.settings.profile.avatar.clone(),
                s.current_streak,
                s.longest_streak,
            )
        })
        .await;
    let level_progress = u8::try_from(level.current_xp * 100 / level.required_xp).unwrap_or(100);
    let message = MotivationTier::from_progress(overall).pick_message(&mut rand::thread_rng());

    println!("{}", format!("{} {}", avatar, name).blue().bold());
    println!();
    println!(
        "{} {} {} {}/{} XP",
        "Level".bold(),
        level.level.to_string().yellow().bold(),
        progress_bar(level_progress, 20),
        level.current_xp,
        level.required_xp
    );
    println!(
        "{} {} days (best {})",
        "🔥 Streak:".bold(),
        streak,
        longest
    );
    println!(
        "{} {} {}%",
        "📈 Overall:".bold(),
        progress_bar(overall, 20),
        overall
    );
    println!(
        "{} {} due soon, {} overdue",
        "📅 Steps:".bold(),
        due_soon,
        if overdue > 0 {
            overdue.to_string().red().bold()
        } else {
            overdue.to_string().normal()
        }
    );
    println!();
    println!("{}", message.italic());
    Ok(())
}

pub async fn show_due(store: &RoadmapStore) -> anyhow::Result<()> {
    let today = store.today();
    let (overdue_count, overdue, upcoming_count, upcoming) = store
        .read(|s| {
            let overdue = overdue_steps(s, today);
            let upcoming = upcoming_steps(s, today);
            (overdue.len(), due_table(&overdue), upcoming.len(), due_table(&upcoming))
        })
        .await;

    if overdue_count == 0 && upcoming_count == 0 {
        println!("{}", "Nothing scheduled. Add due dates with 'learnpath steps edit --due'".dimmed());
        return Ok(());
    }
    if overdue_count > 0 {
        println!("{}", format!("⚠️  Overdue ({})", overdue_count).red().bold());
        println!("{overdue}");
        println!();
    }
    if upcoming_count > 0 {
        println!("{}", format!("📅 Upcoming ({})", upcoming_count).blue().bold());
        println!("{upcoming}");
    }
    Ok(())
}

pub async fn show_achievements(store: &RoadmapStore) -> anyhow::Result<()> {
    let achievements = store.read(|s| s.achievements.clone()).await;
    let unlocked = achievements.iter().filter(|a| a.is_unlocked()).count();

    println!(
        "{}",
        format!("🏆 Achievements ({}/{})", unlocked, achievements.len())
            .blue()
            .bold()
    );
    println!();
    println!("{}", achievement_table(&achievements));
    Ok(())
}

pub async fn show_activity(store: &RoadmapStore, args: ActivityArgs) -> anyhow::Result<()> {
    let (empty, table) = store
        .read(|s| {
            (
                s.activity_log.is_empty(),
                activity_table(s.activity_log.iter().take(args.limit)),
            )
        })
        .await;

    if empty {
        println!("{}", "No activity yet. Complete a step to get started".yellow());
        return Ok(());
    }
    println!("{}", "📜 Recent Activity".blue().bold());
    println!();
    println!("{table}");
    Ok(())
}

pub async fn show_stats(store: &RoadmapStore) -> anyhow::Result<()> {
    let stats = store.statistics().await;

    println!("{}", "📊 Learning Statistics".blue().bold());
    println!();
    println!(
        "{} {} ({} completed)",
        "Roadmaps:".bold(),
        stats.total_roadmaps,
        stats.completed_roadmaps
    );
    println!(
        "{} {}/{}",
        "Steps completed:".bold(),
        stats.completed_steps,
        stats.total_steps
    );
    println!(
        "{} {} over {} pomodoro sessions",
        "Study time:".bold(),
        format_study_time(stats.total_study_minutes),
        stats.pomodoro_sessions
    );
    println!(
        "{} {} current, {} longest",
        "Streak:".bold(),
        stats.current_streak,
        stats.longest_streak
    );
    println!(
        "{} {} ({} XP into level)",
        "Level:".bold(),
        stats.level.level,
        stats.level.current_xp
    );
    println!(
        "{} {} achievements, {} quests",
        "Earned:".bold(),
        stats.unlocked_achievements,
        stats.completed_quests
    );

    println!();
    println!("{}", "This week".bold());
    for day in &stats.this_week {
        println!(
            "  {} {:>2} steps {:>4} min",
            day.date.format("%a"),
            day.steps,
            day.minutes
        );
    }

    if !stats.categories.is_empty() {
        println!();
        println!("{}", "By category".bold());
        for category in &stats.categories {
            println!(
                "  {:<16} {} {:>3}% ({}/{})",
                category.name,
                progress_bar(category.progress, 10),
                category.progress,
                category.completed_steps,
                category.total_steps
            );
        }
    }

    if !stats.top_roadmaps.is_empty() {
        println!();
        println!("{}", "Top roadmaps".bold());
        for (rank, roadmap) in stats.top_roadmaps.iter().enumerate() {
            println!("  {}. {} ({}%)", rank + 1, roadmap.title, roadmap.progress);
        }
    }
    Ok(())
}

pub async fn record_pomodoro(store: &RoadmapStore, args: PomodoroArgs) -> anyhow::Result<()> {
    let end_time = Utc::now();
    let input = PomodoroInput {
        roadmap_id: args.roadmap_id,
        start_time: end_time - Duration::minutes(i64::from(args.minutes)),
        end_time,
        duration: args.minutes,
        completed: !args.abandoned,
    };

    let outcome = store.add_pomodoro_session(input).await?;
    println!(
        "{}",
        format!("🍅 Logged {} minutes of focused study", outcome.value.duration).green()
    );
    super::output::print_rewards(store, outcome.xp_awarded, outcome.report.as_ref()).await;
    Ok(())
}

pub async fn grant_xp(store: &RoadmapStore, args: XpArgs) -> anyhow::Result<()> {
    let granted = store
        .add_xp(
            args.source.into(),
            args.amount,
            &args.reason,
            args.related.as_deref(),
        )
        .await;

    if granted {
        let level = store.level().await;
        println!(
            "{}",
            format!("✨ +{} XP for {} (level {})", args.amount, args.reason, level.level)
                .yellow()
                .bold()
        );
    } else {
        println!("{}", "No XP granted".dimmed());
    }
    Ok(())
}
