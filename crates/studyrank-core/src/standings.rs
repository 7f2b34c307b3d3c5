//! Everything a leaderboard view needs, computed in one pass.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::badge::{resolve_badge, Badge};
use crate::calendar::normalize_day;
use crate::locator::{place_user_with, RankPath};
use crate::model::{LeaderboardEntry, UserSummary};
use crate::peers::generate_peer_window;
use crate::population::{generate_elite_list, EliteList};

/// A user's standing for one day of the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub day_of_month: u32,
    pub summary: UserSummary,
    pub score: f64,
    pub global_rank: u32,
    #[serde(flatten)]
    pub path: RankPath,
    pub badge: Badge,
    pub elite: EliteList,
    /// Empty when the user made the elite list.
    pub peers: Vec<LeaderboardEntry>,
}

impl Standings {
    /// Compute standings for `summary` on `day_of_month`, drawing peer
    /// jitter from `rng`.
    pub fn compute<R: Rng + ?Sized>(summary: UserSummary, day_of_month: u32, rng: &mut R) -> Self {
        let day = normalize_day(day_of_month as i64);
        let elite = generate_elite_list(day, &summary);
        let placement = place_user_with(&elite, &summary, day);

        let peers = if placement.is_elite() {
            Vec::new()
        } else {
            generate_peer_window(placement.rank, &summary, day, rng)
        };

        Self {
            day_of_month: day,
            summary,
            score: summary.score(),
            global_rank: placement.rank,
            path: placement.path,
            badge: resolve_badge(placement.rank),
            elite,
            peers,
        }
    }

    /// The list a "my lobby" view shows: peers, or the elite list when the
    /// user is part of it.
    pub fn lobby(&self) -> &[LeaderboardEntry] {
        if self.peers.is_empty() {
            &self.elite.entries
        } else {
            &self.peers
        }
    }

    /// Rename the user's rows for display.
    pub fn with_display_name(mut self, name: &str) -> Self {
        self.elite
            .entries
            .iter_mut()
            .chain(self.peers.iter_mut())
            .filter(|e| e.is_user)
            .for_each(|e| e.name = name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::{Tier, POPULATION_SIZE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn elite_user_has_no_peer_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let standings = Standings::compute(UserSummary::new(400, 100.0), 15, &mut rng);
        assert_eq!(standings.global_rank, 1);
        assert_eq!(standings.path, RankPath::Elite);
        assert_eq!(standings.badge.tier, Tier::Grandmaster);
        assert!(standings.peers.is_empty());
        assert_eq!(standings.lobby().len(), 100);
        assert_eq!(standings.elite.user_rank, Some(1));
    }

    #[test]
    fn interpolated_user_gets_peers() {
        let mut rng = StdRng::seed_from_u64(1);
        let standings = Standings::compute(UserSummary::new(120, 85.0), 15, &mut rng);
        assert_eq!(standings.global_rank, 29_000);
        assert_eq!(standings.badge.to_string(), "Heroic 3");
        assert_eq!(standings.score, 10_200.0);
        assert_eq!(standings.peers.len(), 50);
        assert_eq!(standings.peers[0].rank, 28_975);
        let me: Vec<_> = standings.lobby().iter().filter(|e| e.is_user).collect();
        assert_eq!(me.len(), 1);
        assert_eq!(me[0].rank, standings.global_rank);
    }

    #[test]
    fn inactive_user_sits_at_the_bottom() {
        let mut rng = StdRng::seed_from_u64(1);
        let standings = Standings::compute(UserSummary::new(0, 0.0), 3, &mut rng);
        assert_eq!(standings.global_rank, POPULATION_SIZE);
        assert_eq!(standings.path, RankPath::Inactive);
        assert_eq!(standings.badge.tier, Tier::Bronze);
        assert_eq!(standings.badge.division, 1);
        assert_eq!(standings.peers.len(), 26);
    }

    #[test]
    fn identical_inputs_and_seed_are_idempotent() {
        let a = Standings::compute(UserSummary::new(64, 55.0), 11, &mut StdRng::seed_from_u64(5));
        let b = Standings::compute(UserSummary::new(64, 55.0), 11, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn display_name_applies_to_user_rows_only() {
        let mut rng = StdRng::seed_from_u64(1);
        let standings =
            Standings::compute(UserSummary::new(120, 85.0), 15, &mut rng).with_display_name("Rafi");
        for entry in standings.lobby() {
            if entry.is_user {
                assert_eq!(entry.name, "Rafi");
            } else {
                assert_ne!(entry.name, "Rafi");
            }
        }
    }

    #[test]
    fn day_zero_is_normalised() {
        let standings =
            Standings::compute(UserSummary::new(3, 40.0), 0, &mut StdRng::seed_from_u64(2));
        assert_eq!(standings.day_of_month, 1);
    }
}
