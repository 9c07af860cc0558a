// ABOUTME: XP and level ledger
// ABOUTME: Every XP grant updates the level and writes exactly one activity entry

use chrono::{DateTime, Utc};
use learnpath_core::{generate_id, level_from_xp, ActivityKind, ActivityLogEntry, AppState};
use tracing::debug;

/// One XP award and the activity entry that records it
#[derive(Debug, Clone, PartialEq)]
pub struct XpGrant {
    pub kind: ActivityKind,
    pub amount: u64,
    pub title: String,
    pub description: String,
    pub related_id: Option<String>,
}

impl XpGrant {
    pub fn new(kind: ActivityKind, amount: u64, title: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            title: title.into(),
            description: format!("Earned {} XP", amount),
            related_id: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn related(mut self, id: impl Into<String>) -> Self {
        self.related_id = Some(id.into());
        self
    }
}

/// Apply a grant. A zero amount is ignored and returns `false`.
pub fn add_xp(state: &mut AppState, grant: XpGrant, now: DateTime<Utc>) -> bool {
    if grant.amount == 0 {
        debug!("Ignoring zero XP grant '{}'", grant.title);
        return false;
    }

    state.total_xp = state.total_xp.saturating_add(grant.amount);
    state.level = level_from_xp(state.total_xp).level;
    state.activity_log.push(ActivityLogEntry {
        id: generate_id("log"),
        kind: grant.kind,
        title: grant.title,
        description: grant.description,
        xp: grant.amount,
        timestamp: now,
        related_id: grant.related_id,
    });

    debug!(
        "Granted {} XP, total {} (level {})",
        grant.amount, state.total_xp, state.level
    );
    true
}
