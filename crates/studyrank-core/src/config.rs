//! studyrank configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::calendar::DEFAULT_UTC_OFFSET_MINUTES;
use crate::model::USER_DISPLAY_NAME;
use crate::summary::MONTHLY_TARGET_SESSIONS;

/// Top-level studyrank configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyrankConfig {
    /// Name shown on the user's leaderboard row.
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Offset of the reference time zone, in minutes east of UTC.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i32,
    /// Seed for the peer-efficiency jitter. Unset means fresh jitter per run.
    #[serde(default)]
    pub jitter_seed: Option<u64>,
    /// Monthly session goal used for progress reporting.
    #[serde(default = "default_monthly_target")]
    pub monthly_target_sessions: u32,
}

fn default_display_name() -> String {
    USER_DISPLAY_NAME.to_string()
}
fn default_utc_offset() -> i32 {
    DEFAULT_UTC_OFFSET_MINUTES
}
fn default_monthly_target() -> u32 {
    MONTHLY_TARGET_SESSIONS
}

impl Default for StudyrankConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            utc_offset_minutes: default_utc_offset(),
            jitter_seed: None,
            monthly_target_sessions: default_monthly_target(),
        }
    }
}

/// Load config from an explicit path, or search the well-known paths.
///
/// Search order without a path:
/// 1. `studyrank.toml` in the current directory
/// 2. `~/.config/studyrank/config.toml`
///
/// Environment variable overrides: `STUDYRANK_UTC_OFFSET_MINUTES`, `STUDYRANK_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<StudyrankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("studyrank.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => StudyrankConfig::default(),
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<StudyrankConfig> {
    Ok(toml::from_str::<StudyrankConfig>(content)?)
}

fn apply_env_overrides(config: &mut StudyrankConfig) -> Result<()> {
    if let Ok(offset) = std::env::var("STUDYRANK_UTC_OFFSET_MINUTES") {
        config.utc_offset_minutes = offset
            .trim()
            .parse()
            .with_context(|| format!("invalid STUDYRANK_UTC_OFFSET_MINUTES: '{offset}'"))?;
    }

    if let Ok(seed) = std::env::var("STUDYRANK_SEED") {
        config.jitter_seed = Some(
            seed.trim()
                .parse()
                .with_context(|| format!("invalid STUDYRANK_SEED: '{seed}'"))?,
        );
    }

    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studyrank"))
}
