//! Rank tiers over the synthetic population.
//!
//! The table is ordered by rank band: index 0 holds the elite top-100 band and
//! the last entry reaches the bottom of the population.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of synthetic candidates the user is ranked against.
pub const POPULATION_SIZE: u32 = 2_000_000;

/// The eight named tiers, from the lowest band to the elite band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Heroic,
    Master,
    Grandmaster,
}

impl Tier {
    /// Human-readable tier name.
    pub fn label(self) -> &'static str {
        self.definition().label
    }

    /// The table row for this tier.
    pub fn definition(self) -> &'static TierDefinition {
        TIER_TABLE
            .iter()
            .find(|t| t.tier == self)
            .unwrap_or(lowest_tier())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bronze" => Ok(Tier::Bronze),
            "silver" => Ok(Tier::Silver),
            "gold" => Ok(Tier::Gold),
            "platinum" => Ok(Tier::Platinum),
            "diamond" => Ok(Tier::Diamond),
            "heroic" => Ok(Tier::Heroic),
            "master" => Ok(Tier::Master),
            "grandmaster" | "gm" => Ok(Tier::Grandmaster),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}

/// One row of the tier table. Rank bounds are 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierDefinition {
    pub tier: Tier,
    pub label: &'static str,
    /// CSS hex colour used by front-ends.
    pub color: &'static str,
    pub min_rank: u32,
    pub max_rank: u32,
    /// Number of divisions inside the band.
    pub division: u32,
    /// Share of the population at or above this band, for display.
    pub percentile: &'static str,
    /// Study volume the band roughly corresponds to, for display.
    pub session_threshold: &'static str,
}

impl TierDefinition {
    /// Whether `rank` falls inside this band.
    pub fn contains(&self, rank: u32) -> bool {
        (self.min_rank..=self.max_rank).contains(&rank)
    }

    /// Width of the band minus one (`max_rank - min_rank`).
    pub fn span(&self) -> u32 {
        self.max_rank - self.min_rank
    }
}

pub static TIER_TABLE: [TierDefinition; 8] = [
    TierDefinition {
        tier: Tier::Grandmaster,
        label: "Grandmaster",
        color: "#facc15",
        min_rank: 1,
        max_rank: 100,
        division: 1,
        percentile: "Top 100 Elite",
        session_threshold: "12+ Hours/Day",
    },
    TierDefinition {
        tier: Tier::Master,
        label: "Master",
        color: "#d946ef",
        min_rank: 101,
        max_rank: 19_000,
        division: 3,
        percentile: "Top 0.95%",
        session_threshold: "8-12 Hours/Day",
    },
    TierDefinition {
        tier: Tier::Heroic,
        label: "Heroic",
        color: "#f43f5e",
        min_rank: 19_001,
        max_rank: 49_000,
        division: 3,
        percentile: "Top 2.45%",
        session_threshold: "6-8 Hours/Day",
    },
    TierDefinition {
        tier: Tier::Diamond,
        label: "Diamond",
        color: "#6366f1",
        min_rank: 49_001,
        max_rank: 149_000,
        division: 3,
        percentile: "Top 7.45%",
        session_threshold: "4-6 Hours/Day",
    },
    TierDefinition {
        tier: Tier::Platinum,
        label: "Platinum",
        color: "#22d3ee",
        min_rank: 149_001,
        max_rank: 449_000,
        division: 3,
        percentile: "Top 22.45%",
        session_threshold: "3-4 Hours/Day",
    },
    TierDefinition {
        tier: Tier::Gold,
        label: "Gold",
        color: "#fbbf24",
        min_rank: 449_001,
        max_rank: 1_049_000,
        division: 3,
        percentile: "Top 52.45%",
        session_threshold: "2-3 Hours/Day",
    },
    TierDefinition {
        tier: Tier::Silver,
        label: "Silver",
        color: "#94a3b8",
        min_rank: 1_049_001,
        max_rank: 1_749_000,
        division: 3,
        percentile: "Top 87.45%",
        session_threshold: "1-2 Hours/Day",
    },
    TierDefinition {
        tier: Tier::Bronze,
        label: "Bronze",
        color: "#cd7f32",
        min_rank: 1_749_001,
        max_rank: POPULATION_SIZE,
        division: 3,
        percentile: "Bottom 12.55%",
        session_threshold: "0-1 Hours/Day",
    },
];

/// The bottom band, used as the fallback for out-of-range ranks.
pub fn lowest_tier() -> &'static TierDefinition {
    &TIER_TABLE[TIER_TABLE.len() - 1]
}

/// Find the band containing `rank`, falling back to the lowest tier.
pub fn tier_for_rank(rank: u32) -> &'static TierDefinition {
    TIER_TABLE
        .iter()
        .find(|t| t.contains(rank))
        .unwrap_or(lowest_tier())
}
