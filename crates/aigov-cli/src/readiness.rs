//! # Readiness Subcommand
//!
//! Evaluates an intake record file against a tier table and prints a
//! per-tier readiness report. With `--require NAME` the command doubles
//! as a CI gate: it exits 1 unless the named tier is fully ready.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use aigov_core::{IntakeFields, TierReport};

/// Arguments for the `aigov readiness` subcommand.
#[derive(Args, Debug)]
pub struct ReadinessArgs {
    /// Path to the intake record JSON file (an object of field values).
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Path to a custom tier table (JSON or YAML). Defaults to the
    /// built-in EU AI Act export tiers.
    #[arg(long, value_name = "PATH")]
    pub tiers: Option<PathBuf>,

    /// Report only the named tier.
    #[arg(long, value_name = "NAME")]
    pub tier: Option<String>,

    /// Exit with code 1 unless the named tier is ready.
    #[arg(long, value_name = "NAME")]
    pub require: Option<String>,

    /// Emit the report as JSON instead of the human-readable table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the readiness subcommand.
///
/// Returns exit code: 0 on success, 1 when `--require` names a tier that
/// is not ready, operational errors propagate as `anyhow` errors.
pub fn run_readiness(args: &ReadinessArgs) -> Result<u8> {
    let raw = std::fs::read_to_string(&args.record)
        .with_context(|| format!("failed to read record {}", args.record.display()))?;
    let fields: IntakeFields = serde_json::from_str(&raw)
        .with_context(|| format!("invalid record {}", args.record.display()))?;

    let table = crate::load_table(args.tiers.as_deref())?;

    let reports = match &args.tier {
        Some(name) => {
            let report = table
                .evaluate(&fields, name)
                .with_context(|| format!("unknown tier '{name}'"))?;
            vec![report]
        }
        None => table.evaluate_all(&fields),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", render_reports(&reports));
    }

    if let Some(name) = &args.require {
        let required = table
            .evaluate(&fields, name)
            .with_context(|| format!("unknown tier '{name}'"))?;
        if !required.progress.is_ready {
            tracing::warn!(
                tier = %name,
                completed = required.progress.completed,
                total = required.progress.total,
                "required tier is not ready"
            );
            return Ok(1);
        }
    }

    Ok(0)
}

/// Render reports as an aligned human-readable table.
///
/// Missing-field labels are already capped upstream; a trailing ellipsis
/// marks reports where further fields are missing beyond the cap.
fn render_reports(reports: &[TierReport]) -> String {
    let name_width = reports
        .iter()
        .map(|r| r.tier.len())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    for report in reports {
        let p = &report.progress;
        let status = if p.is_ready { "READY" } else { "incomplete" };
        let mut line = format!(
            "{:<name_width$}  {:>3}/{:<3} {:>4}%  {}",
            report.tier, p.completed, p.total, p.percentage, status
        );
        if !p.missing_fields.is_empty() {
            let hidden = (p.total - p.completed) - p.missing_fields.len();
            line.push_str(&format!("  missing: {}", p.missing_fields.join(", ")));
            if hidden > 0 {
                line.push_str(&format!(" (+{hidden} more)"));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aigov_core::{FieldValue, TierTable};

    fn fields(pairs: &[(&str, &str)]) -> IntakeFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_render_ready_tier() {
        let table = TierTable::export_default();
        let record = fields(&[
            ("system_name", "Triage Assistant"),
            ("intended_purpose", "Clinical triage"),
            ("provider_name", "Acme Health"),
            ("risk_tier", "high"),
        ]);
        let report = table.evaluate(&record, "memo").unwrap();
        let rendered = render_reports(&[report]);
        assert!(rendered.contains("READY"));
        assert!(rendered.contains("4/4"));
        assert!(!rendered.contains("missing:"));
    }

    #[test]
    fn test_render_incomplete_tier_lists_missing_labels() {
        let table = TierTable::export_default();
        let report = table.evaluate(&IntakeFields::new(), "memo").unwrap();
        let rendered = render_reports(&[report]);
        assert!(rendered.contains("incomplete"));
        assert!(rendered.contains("0/4"));
        assert!(rendered.contains("missing:"));
        // Four fields missing, three shown, one hidden behind the cap.
        assert!(rendered.contains("(+1 more)"));
    }

    #[test]
    fn test_render_full_table_has_one_line_per_tier() {
        let table = TierTable::export_default();
        let reports = table.evaluate_all(&IntakeFields::new());
        let rendered = render_reports(&reports);
        assert_eq!(rendered.lines().count(), 3);
    }
}
