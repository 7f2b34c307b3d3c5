//! Tier and division badge for a rank.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tiers::{tier_for_rank, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub tier: Tier,
    /// Division inside the tier, `1..=division count`. Always 1 for the top tier.
    pub division: u32,
}

impl Badge {
    /// Whether the division is shown; single-division tiers hide it.
    pub fn shows_division(&self) -> bool {
        self.tier.definition().division > 1
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shows_division() {
            write!(f, "{} {}", self.tier, self.division)
        } else {
            write!(f, "{}", self.tier)
        }
    }
}

/// Resolve the badge for `rank`.
///
/// Divisions are counted up from the bottom of the band: a rank at the
/// band's `max_rank` is division 1 and ranks near `min_rank` reach the
/// highest division.
pub fn resolve_badge(rank: u32) -> Badge {
    let def = tier_for_rank(rank);
    if def.division <= 1 {
        return Badge {
            tier: def.tier,
            division: 1,
        };
    }

    let div_size = def.span() as f64 / def.division as f64;
    let progress_in_tier = def.max_rank.saturating_sub(rank) as f64;
    let division = ((progress_in_tier / div_size).floor() as u32 + 1).clamp(1, def.division);

    Badge {
        tier: def.tier,
        division,
    }
}
