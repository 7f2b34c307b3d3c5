//! The `studyrank tiers` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use studyrank_core::tiers::{TierDefinition, TIER_TABLE};
use studyrank_core::Tier;

use super::{print_json, OutputFormat};

pub fn execute(tier: Option<Tier>, format: OutputFormat) -> Result<()> {
    let rows: Vec<&TierDefinition> = match tier {
        Some(tier) => vec![tier.definition()],
        None => TIER_TABLE.iter().collect(),
    };

    if format == OutputFormat::Json {
        return print_json(&rows);
    }

    let mut table = Table::new();
    table.set_header(vec!["Tier", "Positions", "Divisions", "Share", "Volume", "Colour"]);
    for t in rows {
        table.add_row(vec![
            Cell::new(t.label),
            Cell::new(format!("#{} - #{}", t.min_rank, t.max_rank)),
            Cell::new(t.division),
            Cell::new(t.percentile),
            Cell::new(t.session_threshold),
            Cell::new(t.color),
        ]);
    }
    println!("{table}");
    Ok(())
}
