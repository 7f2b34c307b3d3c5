//! The `studyrank elite` command.

use std::path::PathBuf;

use anyhow::Result;

use studyrank_core::population::generate_elite_list;

use super::{entries_table, print_json, OutputFormat, RankInputs};
use crate::UserArgs;

pub fn execute(args: UserArgs, config_path: Option<PathBuf>) -> Result<()> {
    let ctx = RankInputs::from_args(args, config_path)?;
    let elite = generate_elite_list(ctx.day, &ctx.summary);

    match ctx.format {
        OutputFormat::Json => print_json(&elite),
        OutputFormat::Text => {
            println!("{}", entries_table(&elite.entries, &ctx.config.display_name));
            match elite.user_entry() {
                Some(me) => println!(
                    "\nYou are #{} in the elite list with {:.0} points.",
                    me.rank, me.score
                ),
                None => println!(
                    "\nBeat {:.0} points to enter the elite list (you have {:.0}).",
                    elite.cutoff_score(),
                    ctx.summary.score()
                ),
            }
            Ok(())
        }
    }
}
