//! The `studyrank rank` command.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use studyrank_core::badge::{resolve_badge, Badge};
use studyrank_core::locator::{place_user, RankPath};

use super::{print_json, OutputFormat, RankInputs};
use crate::UserArgs;

#[derive(Serialize)]
struct RankOutput {
    day_of_month: u32,
    sessions: u32,
    efficiency: f64,
    score: f64,
    rank: u32,
    #[serde(flatten)]
    path: RankPath,
    badge: Badge,
}

pub fn execute(args: UserArgs, config_path: Option<PathBuf>) -> Result<()> {
    let ctx = RankInputs::from_args(args, config_path)?;
    let placement = place_user(&ctx.summary, ctx.day);
    let badge = resolve_badge(placement.rank);

    match ctx.format {
        OutputFormat::Json => print_json(&RankOutput {
            day_of_month: ctx.day,
            sessions: ctx.summary.total_sessions,
            efficiency: ctx.summary.avg_efficiency,
            score: ctx.summary.score(),
            rank: placement.rank,
            path: placement.path,
            badge,
        }),
        OutputFormat::Text => {
            println!("Global rank: #{}", placement.rank);
            println!("Badge: {badge}");
            println!("Points: {:.0}", ctx.summary.score());
            println!("Placement: {}", describe_path(placement.path));
            Ok(())
        }
    }
}

fn describe_path(path: RankPath) -> String {
    match path {
        RankPath::Elite => "elite top 100".to_string(),
        RankPath::Inactive => "no activity this month".to_string(),
        RankPath::Interpolated { tier } => format!("estimated within the {tier} band"),
    }
}
