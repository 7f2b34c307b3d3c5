//! The `studyrank standings` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::Serialize;

use studyrank_core::config::load_config_from;
use studyrank_core::standings::Standings;
use studyrank_core::summary::{load_day_log, summarize_month, MonthlySummary};

use super::{entries_table, jitter_rng, print_json, Clock, OutputFormat};

#[derive(Serialize)]
struct StandingsOutput<'a> {
    month: &'a MonthlySummary,
    standings: &'a Standings,
}

pub fn execute(
    log_path: PathBuf,
    month: Option<String>,
    day: Option<u32>,
    seed: Option<u64>,
    format: OutputFormat,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let clock = Clock::read(&config);
    let today = clock.today();

    let (year, month) = match &month {
        Some(m) => parse_month(m)?,
        None => (today.year(), today.month()),
    };
    let day = clock.resolve_day(day)?;

    let log = load_day_log(&log_path)?;
    let monthly = summarize_month(&log, year, month, config.monthly_target_sessions, today)
        .with_context(|| format!("failed to summarise {year}-{month:02}"))?;

    let mut rng = jitter_rng(seed, &config);
    let standings = Standings::compute(monthly.user_summary(), day, &mut rng)
        .with_display_name(&config.display_name);

    match format {
        OutputFormat::Json => print_json(&StandingsOutput {
            month: &monthly,
            standings: &standings,
        }),
        OutputFormat::Text => {
            println!(
                "{year}-{month:02}: {} sessions, {:.1}% avg efficiency, {} active days ({} high quality)",
                monthly.total_sessions,
                monthly.avg_efficiency,
                monthly.active_days,
                monthly.high_quality_days
            );
            println!(
                "Monthly goal: {}/{} sessions ({}%)",
                monthly.total_sessions, monthly.target_sessions, monthly.target_progress_percent
            );
            println!(
                "Consistency: {:.0}%  Mandatory met: {} days  Daily target met: {} days",
                monthly.consistency_percent,
                monthly.mandatory_met_days,
                monthly.daily_target_met_days
            );
            let buckets: Vec<String> = monthly
                .distribution
                .buckets()
                .iter()
                .map(|(label, days)| format!("{label}: {days}"))
                .collect();
            println!("Sessions per day: {}", buckets.join("  "));
            println!(
                "Global rank: #{}  {}  {:.0} pts",
                standings.global_rank, standings.badge, standings.score
            );
            println!("\n{}", entries_table(standings.lobby(), &config.display_name));
            Ok(())
        }
    }
}

/// Parse `YYYY-MM` (or `YYYY-M`).
fn parse_month(s: &str) -> Result<(i32, u32)> {
    let (year, month) = s
        .trim()
        .split_once('-')
        .with_context(|| format!("invalid month '{s}', expected YYYY-MM"))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in '{s}'"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month in '{s}'"))?;
    anyhow::ensure!((1..=12).contains(&month), "month must be between 1 and 12");
    Ok((year, month))
}
