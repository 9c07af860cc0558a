// ABOUTME: Gamification engine for LearnPath
// ABOUTME: XP ledger, day streaks, quests, achievements and the post-mutation effect pipeline

pub mod achievements;
pub mod clock;
pub mod ledger;
pub mod pipeline;
pub mod quests;
pub mod streak;

pub use achievements::{achievement_progress, scan_achievements, AchievementStats};
pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::{add_xp, XpGrant};
pub use pipeline::{
    AdvanceQuests, Effect, EffectContext, EffectPipeline, PipelineReport, QualifyingAction,
    RecordDailyActivity, ScanAchievements, UpdateStreak,
};
pub use quests::{reset_daily_quests, reset_weekly_quests, unlock_quest, update_quest_progress};
pub use streak::{record_activity, StreakChange};
