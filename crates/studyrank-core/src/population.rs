//! The synthetic elite: a closed-form top-100 ranking.
//!
//! Candidate `i` (rank `i + 1`) studies `16.5 - 0.02 i` sessions a day at
//! `98 - 0.05 i` percent efficiency. The list only depends on the day of the
//! month, so the same day always yields the same list.

use serde::{Deserialize, Serialize};

use crate::calendar::normalize_day;
use crate::model::{LeaderboardEntry, UserSummary};
use crate::score::compute_score;

/// Length of the elite list.
pub const ELITE_SIZE: usize = 100;

const BOT_NAMES: [&str; 15] = [
    "Abir_X", "Sajid_H", "Tausif_Z", "Nafis_07", "Mehedi_K", "Arafat_B", "Anika_D", "Jarin_S",
    "Sifat_V", "Piyal_L", "Tanvir_M", "Fahim_R", "Nayeem_W", "Tahmid_A", "Emon_N",
];

/// The elite list for one day, with the user spliced in when they qualify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EliteList {
    /// Exactly [`ELITE_SIZE`] entries ranked `1..=100` in order.
    pub entries: Vec<LeaderboardEntry>,
    /// The user's rank when they made the list.
    pub user_rank: Option<u32>,
}

impl EliteList {
    pub fn user_entry(&self) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.is_user)
    }

    /// Score needed to beat to enter the list.
    pub fn cutoff_score(&self) -> f64 {
        self.entries.last().map(|e| e.score).unwrap_or(0.0)
    }
}

/// Synthetic candidate at zero-based position `index`, before any insertion.
pub fn elite_candidate(index: usize, day_of_month: u32) -> LeaderboardEntry {
    let day = normalize_day(day_of_month as i64);
    let i = index as f64;
    let sessions_per_day = 16.5 - 0.02 * i;
    let sessions = (sessions_per_day * day as f64).floor() as u32;
    let efficiency = 98.0 - 0.05 * i;

    LeaderboardEntry {
        id: format!("gm-{index}"),
        name: format!("{}_{}", BOT_NAMES[index % BOT_NAMES.len()], index + 1),
        sessions,
        efficiency,
        score: compute_score(sessions, efficiency),
        rank: index as u32 + 1,
        is_user: false,
    }
}

/// Build the top-100 list for `day_of_month` and try to place `user` in it.
///
/// The user takes the first position whose score they strictly exceed; the
/// last synthetic entry drops off and ranks are renumbered by position.
pub fn generate_elite_list(day_of_month: u32, user: &UserSummary) -> EliteList {
    let mut entries: Vec<LeaderboardEntry> = (0..ELITE_SIZE)
        .map(|i| elite_candidate(i, day_of_month))
        .collect();

    let user_score = user.score();
    let position = entries.iter().position(|e| user_score > e.score);

    let user_rank = position.map(|idx| {
        entries.insert(idx, LeaderboardEntry::for_user(user, idx as u32 + 1));
        entries.truncate(ELITE_SIZE);
        for (pos, entry) in entries.iter_mut().enumerate() {
            entry.rank = pos as u32 + 1;
        }
        idx as u32 + 1
    });

    EliteList { entries, user_rank }
}
