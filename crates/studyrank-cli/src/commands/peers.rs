//! The `studyrank peers` command.

use std::path::PathBuf;

use anyhow::Result;

use studyrank_core::locator::place_user;
use studyrank_core::peers::generate_peer_window;

use super::{entries_table, jitter_rng, print_json, OutputFormat, RankInputs};
use crate::UserArgs;

pub fn execute(args: UserArgs, seed: Option<u64>, config_path: Option<PathBuf>) -> Result<()> {
    let ctx = RankInputs::from_args(args, config_path)?;
    let placement = place_user(&ctx.summary, ctx.day);

    if placement.is_elite() {
        match ctx.format {
            OutputFormat::Json => print_json(&Vec::<()>::new())?,
            OutputFormat::Text => println!(
                "You are #{} in the elite list; see `studyrank elite`.",
                placement.rank
            ),
        }
        return Ok(());
    }

    let mut rng = jitter_rng(seed, &ctx.config);
    let window = generate_peer_window(placement.rank, &ctx.summary, ctx.day, &mut rng);

    match ctx.format {
        OutputFormat::Json => print_json(&window),
        OutputFormat::Text => {
            println!("{}", entries_table(&window, &ctx.config.display_name));
            Ok(())
        }
    }
}
