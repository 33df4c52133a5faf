//! # Tiers Subcommand
//!
//! Prints the tier table in effect: each tier's own fields and the
//! effective (cumulative) field count it is evaluated against.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use aigov_core::TierTable;

/// Arguments for the `aigov tiers` subcommand.
#[derive(Args, Debug)]
pub struct TiersArgs {
    /// Path to a custom tier table (JSON or YAML). Defaults to the
    /// built-in EU AI Act export tiers.
    #[arg(long, value_name = "PATH")]
    pub tiers: Option<PathBuf>,

    /// Emit the tier table as JSON (useful as a starting point for a
    /// custom table).
    #[arg(long)]
    pub json: bool,
}

/// Execute the tiers subcommand. Always exits 0 on success.
pub fn run_tiers(args: &TiersArgs) -> Result<u8> {
    let table = crate::load_table(args.tiers.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(0);
    }

    print!("{}", render_table(&table));
    Ok(0)
}

fn render_table(table: &TierTable) -> String {
    let name_width = table
        .tiers()
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = format!("{:<name_width$}  {:>5}  {:>9}\n", "tier", "own", "effective");
    for (index, tier) in table.tiers().iter().enumerate() {
        out.push_str(&format!(
            "{:<name_width$}  {:>5}  {:>9}\n",
            tier.name,
            tier.fields.len(),
            table.effective_fields(index).len()
        ));
    }
    out
}
