//! Day-log error types.
//!
//! The ranking operations themselves cannot fail; these errors only arise
//! when reading and validating the day log a summary is derived from.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or summarising a day log.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The day-log file could not be read.
    #[error("failed to read day log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The day log is not valid JSON of the expected shape.
    #[error("failed to parse day log: {0}")]
    Json(#[from] serde_json::Error),

    /// A key is not a `year-month-day` date.
    #[error("invalid date key: {0}")]
    InvalidDateKey(String),

    /// A session rating is above the 0-10 scale.
    #[error("rating {rating} on {date} is out of range (0-10)")]
    RatingOutOfRange { date: String, rating: u8 },

    /// A requested month is outside 1-12.
    #[error("invalid month {0} (expected 1-12)")]
    InvalidMonth(u32),
}
