//! Synthetic peers around a rank outside the elite list.
//!
//! Peer stats come from the rank's percentile; only the efficiency jitter is
//! random, drawn from the injected generator so tests can pin it.

use rand::Rng;
use tracing::debug;

use crate::calendar::normalize_day;
use crate::model::{LeaderboardEntry, UserSummary};
use crate::population::ELITE_SIZE;
use crate::score::compute_score;
use crate::tiers::POPULATION_SIZE;

/// Maximum number of rows in a peer window.
pub const PEER_WINDOW_SIZE: u32 = 50;
/// How many ranks above the user the window starts.
pub const PEER_WINDOW_LEAD: u32 = 25;
/// Upper bound (exclusive) of the efficiency jitter, in percent.
pub const EFFICIENCY_JITTER: f64 = 10.0;

/// First rank below the elite list.
const FIRST_PEER_RANK: u32 = ELITE_SIZE as u32 + 1;

/// Base efficiency for a peer at the given percentile (1.0 = best).
pub fn base_efficiency(percentile: f64) -> f64 {
    if percentile > 0.99 {
        90.0
    } else if percentile > 0.95 {
        80.0
    } else if percentile > 0.8 {
        60.0
    } else if percentile > 0.5 {
        40.0
    } else if percentile > 0.2 {
        25.0
    } else {
        10.0
    }
}

/// Fraction of the population ranked below `rank`.
pub fn rank_percentile(rank: u32) -> f64 {
    1.0 - rank as f64 / POPULATION_SIZE as f64
}

/// Synthesize the peer sitting at `rank`.
pub fn synthetic_peer<R: Rng + ?Sized>(rank: u32, day_of_month: u32, rng: &mut R) -> LeaderboardEntry {
    let day = normalize_day(day_of_month as i64);
    let percentile = rank_percentile(rank);
    let sessions_per_day = percentile.powf(3.5) * 15.0 + 0.4;
    let sessions = (sessions_per_day * day as f64).floor() as u32;
    let efficiency = base_efficiency(percentile) + rng.gen_range(0.0..EFFICIENCY_JITTER);

    let digits = rank.to_string();
    let suffix = &digits[digits.len().saturating_sub(4)..];

    LeaderboardEntry {
        id: format!("peer-{rank}"),
        name: format!("Candidate_{suffix}"),
        sessions,
        efficiency,
        score: compute_score(sessions, efficiency),
        rank,
        is_user: false,
    }
}

/// Up to fifty rows starting 25 ranks above `user_rank` (never inside the
/// elite list), with the user's own row at `user_rank`.
pub fn generate_peer_window<R: Rng + ?Sized>(
    user_rank: u32,
    user: &UserSummary,
    day_of_month: u32,
    rng: &mut R,
) -> Vec<LeaderboardEntry> {
    let start_rank = user_rank
        .saturating_sub(PEER_WINDOW_LEAD)
        .max(FIRST_PEER_RANK);
    let end_rank = start_rank
        .saturating_add(PEER_WINDOW_SIZE - 1)
        .min(POPULATION_SIZE);
    debug!(user_rank, start_rank, end_rank, "generating peer window");

    (start_rank..=end_rank)
        .map(|rank| {
            if rank == user_rank {
                LeaderboardEntry::for_user(user, rank)
            } else {
                synthetic_peer(rank, day_of_month, &mut *rng)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn user() -> UserSummary {
        UserSummary::new(120, 85.0)
    }

    #[test]
    fn window_around_rank_5000() {
        let mut rng = StdRng::seed_from_u64(42);
        let window = generate_peer_window(5_000, &user(), 15, &mut rng);

        assert_eq!(window.len(), 50);
        assert_eq!(window[0].rank, 4_975);
        assert_eq!(window[49].rank, 5_024);
        for pair in window.windows(2) {
            assert!(pair[0].rank < pair[1].rank);
        }

        let users: Vec<_> = window.iter().filter(|e| e.is_user).collect();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].rank, 5_000);
        assert_eq!(users[0].score, 10_200.0);
    }

    #[test]
    fn window_never_starts_inside_elite_list() {
        let mut rng = StdRng::seed_from_u64(1);
        let window = generate_peer_window(110, &user(), 15, &mut rng);
        assert_eq!(window[0].rank, 101);
        assert_eq!(window.len(), 50);
        assert_eq!(window.iter().filter(|e| e.is_user).count(), 1);
        assert_eq!(window.iter().find(|e| e.is_user).map(|e| e.rank), Some(110));
    }

    #[test]
    fn window_is_truncated_at_population_end() {
        let mut rng = StdRng::seed_from_u64(7);
        let window = generate_peer_window(POPULATION_SIZE, &UserSummary::new(0, 0.0), 15, &mut rng);
        assert_eq!(window.len(), 26);
        assert_eq!(window[0].rank, POPULATION_SIZE - 25);
        let last = window.last().unwrap();
        assert!(last.is_user);
        assert_eq!(last.rank, POPULATION_SIZE);
    }

    #[test]
    fn same_seed_same_window() {
        let a = generate_peer_window(250_000, &user(), 9, &mut StdRng::seed_from_u64(99));
        let b = generate_peer_window(250_000, &user(), 9, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_stays_within_band() {
        let mut rng = StdRng::seed_from_u64(3);
        for rank in [150u32, 50_000, 300_000, 900_000, 1_500_000, 1_999_000] {
            let peer = synthetic_peer(rank, 15, &mut rng);
            let base = base_efficiency(rank_percentile(rank));
            assert!(peer.efficiency >= base && peer.efficiency < base + EFFICIENCY_JITTER);
            assert!((peer.score - peer.sessions as f64 * peer.efficiency).abs() < 1e-9);
        }
    }

    #[test]
    fn peer_stats_follow_percentile() {
        let mut rng = StdRng::seed_from_u64(0);
        let near_top = synthetic_peer(101, 30, &mut rng);
        let bottom = synthetic_peer(1_999_999, 30, &mut rng);
        // ~15.4 sessions/day near the top, 0.4 at the bottom.
        assert_eq!(near_top.sessions, 461);
        assert_eq!(bottom.sessions, 12);
        assert!(near_top.efficiency >= 90.0);
        assert!(bottom.efficiency < 20.0);
    }

    #[test]
    fn base_efficiency_thresholds() {
        assert_eq!(base_efficiency(0.995), 90.0);
        assert_eq!(base_efficiency(0.99), 80.0);
        assert_eq!(base_efficiency(0.96), 80.0);
        assert_eq!(base_efficiency(0.9), 60.0);
        assert_eq!(base_efficiency(0.6), 40.0);
        assert_eq!(base_efficiency(0.3), 25.0);
        assert_eq!(base_efficiency(0.2), 10.0);
        assert_eq!(base_efficiency(0.0), 10.0);
    }

    #[test]
    fn peer_names_use_last_four_digits() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(synthetic_peer(123_456, 1, &mut rng).name, "Candidate_3456");
        assert_eq!(synthetic_peer(150, 1, &mut rng).name, "Candidate_150");
        assert_eq!(synthetic_peer(4_975, 1, &mut rng).id, "peer-4975");
    }
}
