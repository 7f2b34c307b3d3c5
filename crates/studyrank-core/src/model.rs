//! Value types passed between the ranking stages.
//!
//! Nothing here is persisted; every entry is rebuilt on each query.

use serde::{Deserialize, Serialize};

use crate::score::compute_score;

/// Identifier used for the user's own row in every generated list.
pub const USER_ENTRY_ID: &str = "user";

/// Default display name for the user's row.
pub const USER_DISPLAY_NAME: &str = "YOU (CANDIDATE)";

/// Aggregate study performance for the active period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Rated sessions in the period.
    pub total_sessions: u32,
    /// Average efficiency in percent, `0..=100`.
    pub avg_efficiency: f64,
}

impl UserSummary {
    /// Build a summary, clamping efficiency into `0..=100` (NaN becomes 0).
    pub fn new(total_sessions: u32, avg_efficiency: f64) -> Self {
        let avg_efficiency = if avg_efficiency.is_nan() {
            0.0
        } else {
            avg_efficiency.clamp(0.0, 100.0)
        };
        Self {
            total_sessions,
            avg_efficiency,
        }
    }

    pub fn score(&self) -> f64 {
        compute_score(self.total_sessions, self.avg_efficiency)
    }

    /// No rated sessions and no efficiency at all.
    pub fn is_inactive(&self) -> bool {
        self.total_sessions == 0 && self.avg_efficiency == 0.0
    }
}

/// One row of a generated leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Stable id for list rendering (`gm-{i}`, `peer-{rank}` or `user`).
    pub id: String,
    pub name: String,
    pub sessions: u32,
    /// Efficiency in percent, unrounded.
    pub efficiency: f64,
    pub score: f64,
    /// 1-based position, unique within one list.
    pub rank: u32,
    #[serde(default)]
    pub is_user: bool,
}

impl LeaderboardEntry {
    /// The user's own row at `rank`.
    pub fn for_user(user: &UserSummary, rank: u32) -> Self {
        Self {
            id: USER_ENTRY_ID.to_string(),
            name: USER_DISPLAY_NAME.to_string(),
            sessions: user.total_sessions,
            efficiency: user.avg_efficiency,
            score: user.score(),
            rank,
            is_user: true,
        }
    }

    /// Efficiency rounded to a whole percent, for display.
    pub fn display_efficiency(&self) -> u32 {
        self.efficiency.round() as u32
    }
}

/// Compact a rank for narrow displays: ranks above 9,999 become thousands.
pub fn format_rank(rank: u32) -> String {
    if rank > 9_999 {
        format!("{}k", rank / 1_000)
    } else {
        rank.to_string()
    }
}
