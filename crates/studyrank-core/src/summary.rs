//! Monthly summaries from the day log.
//!
//! The log is a JSON object keyed by unpadded `year-month-day` dates
//! (`2024-5-3`). Each day lists its sessions with an optional 0-10 rating
//! and the day's efficiency in percent. Only rated sessions count, and only
//! days that were submitted or carry a rating enter the monthly figures.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::model::UserSummary;

/// Default monthly session goal.
pub const MONTHLY_TARGET_SESSIONS: u32 = 310;
/// Sessions pre-filled on a fresh day, and the mandatory daily minimum.
pub const FIXED_SESSIONS: u32 = 8;
/// Sessions a day needs to meet the daily target.
pub const DAILY_TARGET: u32 = 12;
/// Efficiency at or above which a day counts as high quality.
pub const HIGH_QUALITY_EFFICIENCY: f64 = 80.0;
/// Top of the session rating scale.
pub const MAX_RATING: u8 = 10;

/// One study session slot in a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Everything recorded for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(default)]
    pub sessions: Vec<StudySession>,
    #[serde(default)]
    pub efficiency: f64,
    #[serde(default)]
    pub submitted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical: Option<bool>,
}

impl DayRecord {
    /// A fresh day with the fixed number of empty session slots.
    pub fn blank() -> Self {
        Self {
            sessions: vec![
                StudySession {
                    subject: String::new(),
                    rating: None,
                };
                FIXED_SESSIONS as usize
            ],
            efficiency: 0.0,
            submitted: false,
            submitted_at: None,
            historical: None,
        }
    }

    pub fn rated_sessions(&self) -> u32 {
        self.sessions.iter().filter(|s| s.rating.is_some()).count() as u32
    }

    /// Whether the day holds real work rather than an opened, empty slot.
    pub fn is_logged(&self) -> bool {
        self.submitted || self.rated_sessions() > 0
    }

    /// Efficiency implied by the session ratings.
    pub fn computed_efficiency(&self) -> u32 {
        day_efficiency(self.sessions.iter().filter_map(|s| s.rating))
    }
}

/// Day log keyed by date key.
pub type DayLog = BTreeMap<String, DayRecord>;

/// Mean rating scaled to percent and rounded; 0 without ratings.
pub fn day_efficiency<I>(ratings: I) -> u32
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), r| (sum + r as u32, count + 1));
    if count == 0 {
        return 0;
    }
    let avg = sum as f64 / count as f64;
    (avg / MAX_RATING as f64 * 100.0).round() as u32
}

/// Format a date the way the log keys it (no zero padding).
pub fn date_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Parse a `year-month-day` date. Zero padding is accepted here; log keys
/// themselves must be unpadded (see [`parse_day_log`]).
pub fn parse_date_key(key: &str) -> Result<NaiveDate, RecordError> {
    let invalid = || RecordError::InvalidDateKey(key.to_string());
    let mut parts = key.trim().splitn(3, '-');
    let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse a day log from its JSON text.
///
/// Keys must be in the unpadded form [`date_key`] produces, so one calendar
/// day can never appear under two keys.
pub fn parse_day_log(content: &str) -> Result<DayLog, RecordError> {
    let log: DayLog = serde_json::from_str(content)?;
    for (key, record) in &log {
        if date_key(parse_date_key(key)?) != *key {
            return Err(RecordError::InvalidDateKey(key.clone()));
        }
        if let Some(rating) = record
            .sessions
            .iter()
            .filter_map(|s| s.rating)
            .find(|r| *r > MAX_RATING)
        {
            return Err(RecordError::RatingOutOfRange {
                date: key.clone(),
                rating,
            });
        }
    }
    Ok(log)
}

/// Read a day log exported as JSON.
pub fn load_day_log(path: &Path) -> Result<DayLog, RecordError> {
    let content = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let log = parse_day_log(&content)?;
    tracing::debug!(days = log.len(), path = %path.display(), "loaded day log");
    Ok(log)
}

/// Logged days bucketed by their rated-session count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDistribution {
    #[serde(rename = "<6")]
    pub under_6: u32,
    #[serde(rename = "6-7")]
    pub from_6_to_7: u32,
    #[serde(rename = "8-9")]
    pub from_8_to_9: u32,
    #[serde(rename = "10-11")]
    pub from_10_to_11: u32,
    #[serde(rename = "12-15")]
    pub from_12_to_15: u32,
    #[serde(rename = "16+")]
    pub from_16: u32,
}

impl SessionDistribution {
    pub fn record(&mut self, sessions: u32) {
        let bucket = match sessions {
            0..=5 => &mut self.under_6,
            6..=7 => &mut self.from_6_to_7,
            8..=9 => &mut self.from_8_to_9,
            10..=11 => &mut self.from_10_to_11,
            12..=15 => &mut self.from_12_to_15,
            _ => &mut self.from_16,
        };
        *bucket += 1;
    }

    /// Buckets in ascending order with their labels.
    pub fn buckets(&self) -> [(&'static str, u32); 6] {
        [
            ("<6", self.under_6),
            ("6-7", self.from_6_to_7),
            ("8-9", self.from_8_to_9),
            ("10-11", self.from_10_to_11),
            ("12-15", self.from_12_to_15),
            ("16+", self.from_16),
        ]
    }
}

/// Aggregates for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    /// Rated sessions across the month.
    pub total_sessions: u32,
    /// Mean efficiency over days with non-zero efficiency.
    pub avg_efficiency: f64,
    /// Logged days: submitted, or with at least one rated session.
    pub active_days: u32,
    pub high_quality_days: u32,
    /// Logged days with at least [`FIXED_SESSIONS`] rated sessions.
    pub mandatory_met_days: u32,
    /// Logged days with at least [`DAILY_TARGET`] rated sessions.
    pub daily_target_met_days: u32,
    /// Share of the month's elapsed days that were logged, capped at 100.
    pub consistency_percent: f64,
    pub distribution: SessionDistribution,
    pub target_sessions: u32,
    /// Progress toward the monthly goal, capped at 100.
    pub target_progress_percent: u32,
}

impl MonthlySummary {
    /// Input for the ranking engine.
    pub fn user_summary(&self) -> UserSummary {
        UserSummary::new(self.total_sessions, self.avg_efficiency)
    }
}

/// Days of `year`-`month` that have started by `today`.
fn elapsed_days(year: i32, month: u32, today: NaiveDate) -> u32 {
    match (today.year(), today.month()).cmp(&(year, month)) {
        Ordering::Less => 0,
        Ordering::Equal => today.day(),
        Ordering::Greater => days_in_month(year, month),
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Summarise the logged days of `year`-`month` found in `log`, ignoring days
/// after `today`.
pub fn summarize_month(
    log: &DayLog,
    year: i32,
    month: u32,
    target_sessions: u32,
    today: NaiveDate,
) -> Result<MonthlySummary, RecordError> {
    if !(1..=12).contains(&month) {
        return Err(RecordError::InvalidMonth(month));
    }

    let mut total_sessions = 0u32;
    let mut efficiency_sum = 0.0;
    let mut efficiency_days = 0u32;
    let mut active_days = 0u32;
    let mut high_quality_days = 0u32;
    let mut mandatory_met_days = 0u32;
    let mut daily_target_met_days = 0u32;
    let mut distribution = SessionDistribution::default();

    for (key, record) in log {
        let date = parse_date_key(key)?;
        if date.year() != year || date.month() != month || date > today || !record.is_logged() {
            continue;
        }

        let rated = record.rated_sessions();
        total_sessions += rated;
        active_days += 1;
        distribution.record(rated);
        if rated >= FIXED_SESSIONS {
            mandatory_met_days += 1;
        }
        if rated >= DAILY_TARGET {
            daily_target_met_days += 1;
        }
        if record.efficiency > 0.0 {
            efficiency_sum += record.efficiency;
            efficiency_days += 1;
        }
        if record.efficiency >= HIGH_QUALITY_EFFICIENCY {
            high_quality_days += 1;
        }
    }

    let avg_efficiency = if efficiency_days > 0 {
        efficiency_sum / efficiency_days as f64
    } else {
        0.0
    };

    let target_progress_percent = if target_sessions == 0 {
        100
    } else {
        ((total_sessions as f64 / target_sessions as f64) * 100.0)
            .round()
            .min(100.0) as u32
    };

    let elapsed = elapsed_days(year, month, today);
    let consistency_percent = if elapsed == 0 {
        0.0
    } else {
        (active_days as f64 / elapsed as f64 * 100.0).min(100.0)
    };

    Ok(MonthlySummary {
        year,
        month,
        total_sessions,
        avg_efficiency,
        active_days,
        high_quality_days,
        mandatory_met_days,
        daily_target_met_days,
        consistency_percent,
        distribution,
        target_sessions,
        target_progress_percent,
    })
}
