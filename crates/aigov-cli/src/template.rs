//! # Template Subcommand
//!
//! Emits a JSON record skeleton for a tier: every effective field key
//! mapped to `null`, ready to be filled in and fed back to
//! `aigov readiness`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use aigov_core::{FieldValue, IntakeFields, TierTable};

/// Arguments for the `aigov template` subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Name of the tier to generate a skeleton for.
    #[arg(value_name = "TIER")]
    pub tier: String,

    /// Path to a custom tier table (JSON or YAML). Defaults to the
    /// built-in EU AI Act export tiers.
    #[arg(long, value_name = "PATH")]
    pub tiers: Option<PathBuf>,
}

/// Execute the template subcommand. Exits 0 on success.
pub fn run_template(args: &TemplateArgs) -> Result<u8> {
    let table = crate::load_table(args.tiers.as_deref())?;
    let skeleton = build_skeleton(&table, &args.tier)
        .with_context(|| format!("unknown tier '{}'", args.tier))?;

    println!("{}", serde_json::to_string_pretty(&skeleton)?);
    Ok(0)
}

/// Build a record skeleton containing every effective field of `tier`
/// set to `null`. Returns `None` if the tier is not in the table.
fn build_skeleton(table: &TierTable, tier: &str) -> Option<IntakeFields> {
    let (index, _) = table.get(tier)?;
    Some(
        table
            .effective_fields(index)
            .iter()
            .map(|field| (field.key.clone(), FieldValue::Null))
            .collect(),
    )
}
