//! Synthetic-population ranking engine.
//!
//! Places a user's monthly study performance among two million procedurally
//! generated candidates: a closed-form top-100 list, tier-band interpolation
//! below it, a windowed peer leaderboard and tier/division badges. Nothing is
//! stored; every query recomputes from its inputs.

pub mod badge;
pub mod calendar;
pub mod config;
pub mod error;
pub mod locator;
pub mod model;
pub mod peers;
pub mod population;
pub mod score;
pub mod standings;
pub mod summary;
pub mod tiers;

pub use badge::{resolve_badge, Badge};
pub use error::RecordError;
pub use locator::{locate_global_rank, place_user, RankPath, RankPlacement};
pub use model::{LeaderboardEntry, UserSummary};
pub use peers::generate_peer_window;
pub use population::{generate_elite_list, EliteList};
pub use score::compute_score;
pub use standings::Standings;
pub use tiers::{Tier, TierDefinition, POPULATION_SIZE, TIER_TABLE};
