//! Subcommand implementations and the helpers they share.

pub mod elite;
pub mod init;
pub mod peers;
pub mod rank;
pub mod standings;
pub mod tiers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use comfy_table::{Cell, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

use studyrank_core::calendar::{day_of_month, local_date};
use studyrank_core::config::{load_config_from, StudyrankConfig};
use studyrank_core::model::{format_rank, LeaderboardEntry, UserSummary};
use studyrank_core::resolve_badge;

use crate::UserArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Inputs every ranking command resolves before computing.
pub struct RankInputs {
    pub config: StudyrankConfig,
    pub summary: UserSummary,
    pub day: u32,
    pub format: OutputFormat,
}

impl RankInputs {
    pub fn from_args(args: UserArgs, config_path: Option<PathBuf>) -> Result<Self> {
        anyhow::ensure!(
            (0.0..=100.0).contains(&args.efficiency),
            "efficiency must be between 0 and 100"
        );
        let config = load_config_from(config_path.as_deref())?;
        let day = Clock::read(&config).resolve_day(args.day)?;
        Ok(Self {
            summary: UserSummary::new(args.sessions, args.efficiency),
            day,
            format: args.format,
            config,
        })
    }
}

/// The wall clock, read once per invocation. Every date-dependent input of a
/// command comes from the same reading.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    now: DateTime<Utc>,
    utc_offset_minutes: i32,
}

impl Clock {
    pub fn read(config: &StudyrankConfig) -> Self {
        Self::at(Utc::now(), config.utc_offset_minutes)
    }

    pub fn at(now: DateTime<Utc>, utc_offset_minutes: i32) -> Self {
        tracing::debug!(%now, offset = utc_offset_minutes, "read clock");
        Self {
            now,
            utc_offset_minutes,
        }
    }

    /// Today's date in the configured zone.
    pub fn today(&self) -> NaiveDate {
        local_date(self.now, self.utc_offset_minutes)
    }

    /// An explicit `--day`, or today's day-of-month.
    pub fn resolve_day(&self, day: Option<u32>) -> Result<u32> {
        match day {
            Some(d) => {
                anyhow::ensure!((1..=31).contains(&d), "day must be between 1 and 31");
                Ok(d)
            }
            None => Ok(day_of_month(self.now, self.utc_offset_minutes)),
        }
    }
}

/// Seeded generator when a seed is given on the command line or in config.
pub fn jitter_rng(seed: Option<u64>, config: &StudyrankConfig) -> StdRng {
    match seed.or(config.jitter_seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Render leaderboard rows as a table.
pub fn entries_table(entries: &[LeaderboardEntry], display_name: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Rank", "Name", "Badge", "Sessions", "Eff %", "Points"]);

    for entry in entries {
        let name = if entry.is_user {
            format!("> {display_name}")
        } else {
            entry.name.clone()
        };
        table.add_row(vec![
            Cell::new(format!("#{}", format_rank(entry.rank))),
            Cell::new(name),
            Cell::new(resolve_badge(entry.rank)),
            Cell::new(entry.sessions),
            Cell::new(entry.display_efficiency()),
            Cell::new(format!("{:.0}", entry.score)),
        ]);
    }

    table
}

/// Pretty-print any serializable value as JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
