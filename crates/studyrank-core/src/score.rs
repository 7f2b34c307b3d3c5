//! The single ranking metric.

/// Score a period of study: total sessions weighted by average efficiency.
///
/// `efficiency_percent` is expected in `0..=100`; callers clamp it.
pub fn compute_score(sessions: u32, efficiency_percent: f64) -> f64 {
    sessions as f64 * efficiency_percent
}
