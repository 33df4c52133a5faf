//! # aigov-cli — Subcommand Handlers
//!
//! Handler modules for the `aigov` CLI. Each subcommand module exposes
//! an `Args` struct (clap derive) and a `run_*` function returning the
//! process exit code: 0 on success, 1 when a required tier is not ready
//! or output indicates failure, 2 on operational errors (surfaced as
//! `anyhow` errors by `main`).

use std::path::Path;

use anyhow::{Context, Result};

use aigov_core::TierTable;

pub mod readiness;
pub mod template;
pub mod tiers;

/// Load a tier table from a JSON or YAML file, or fall back to the
/// built-in EU AI Act export table.
///
/// The format is chosen by extension (`.yaml`/`.yml` vs anything else);
/// either way the table passes the validating constructor during
/// deserialization.
pub fn load_table(path: Option<&Path>) -> Result<TierTable> {
    let Some(path) = path else {
        tracing::debug!("using built-in export tier table");
        return Ok(TierTable::export_default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tier table {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let table = if is_yaml {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid YAML tier table {}", path.display()))?
    } else {
        TierTable::from_json(&raw)
            .with_context(|| format!("invalid JSON tier table {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), "loaded tier table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_table_when_no_path() {
        let table = load_table(None).unwrap();
        assert_eq!(table.tiers().len(), 3);
    }

    #[test]
    fn test_load_json_table() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"name": "memo", "fields": [{{"key": "a", "label": "A"}}]}}]"#
        )
        .unwrap();
        let table = load_table(Some(file.path())).unwrap();
        assert_eq!(table.tiers().len(), 1);
        assert_eq!(table.tiers()[0].name, "memo");
    }

    #[test]
    fn test_load_yaml_table() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "- name: memo\n  fields:\n    - key: a\n      label: A\n"
        )
        .unwrap();
        let table = load_table(Some(file.path())).unwrap();
        assert_eq!(table.tiers()[0].fields[0].key, "a");
    }

    #[test]
    fn test_invalid_table_rejected() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        // Duplicate tier names fail the validating constructor.
        write!(
            file,
            r#"[{{"name": "memo", "fields": []}}, {{"name": "memo", "fields": []}}]"#
        )
        .unwrap();
        assert!(load_table(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load_table(Some(Path::new("/nonexistent/tiers.json"))).is_err());
    }
}
