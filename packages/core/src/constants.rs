use std::env;
use std::path::PathBuf;

/// Fixed key the persisted snapshot is stored under
pub const STORAGE_KEY: &str = "learning-roadmap-data";

/// Maximum number of entries kept in the activity feed
pub const ACTIVITY_LOG_CAPACITY: usize = 100;

/// XP required to advance one level
pub const XP_PER_LEVEL: u64 = 1000;

/// Flat XP granted for completing a step
pub const STEP_COMPLETION_XP: u64 = 50;

/// XP granted per focused pomodoro minute
pub const POMODORO_XP_PER_MINUTE: u64 = 2;

/// Get the path to the LearnPath directory (~/.learnpath)
pub fn learnpath_dir() -> PathBuf {
    // HOME first so tests can redirect it
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".learnpath")
    } else {
        dirs::home_dir()
            .unwrap_or_else(env::temp_dir)
            .join(".learnpath")
    }
}

/// Get the path to the snapshot file inside `dir`
pub fn state_file_in(dir: impl Into<PathBuf>) -> PathBuf {
    dir.into().join(format!("{}.json", STORAGE_KEY))
}

/// Get the path to the default snapshot file (~/.learnpath/learning-roadmap-data.json)
pub fn state_file() -> PathBuf {
    state_file_in(learnpath_dir())
}
