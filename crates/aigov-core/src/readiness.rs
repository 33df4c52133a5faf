//! # Tiered Readiness Evaluation
//!
//! The export-readiness evaluator: classifies the field-completion state
//! of a compliance record against a tier's effective required-field set,
//! producing completion counts, a rounded percentage, a readiness flag,
//! and a truncated list of missing-field labels.
//!
//! ## Contract
//!
//! Evaluation is a pure, single-pass function of its inputs — no hidden
//! state, no randomness, no I/O, and no mutation of the record. There is
//! no error taxonomy: an unknown key or a wrong-shaped value degrades to
//! "incomplete" rather than raising.
//!
//! ## Degenerate-input policy
//!
//! A tier whose effective required-field set is empty evaluates to
//! `percentage = 100, is_ready = true`: there is nothing to be
//! incomplete about, and the percentage arithmetic never divides by
//! zero.

use serde::{Deserialize, Serialize};

use crate::tier::FieldRequirement;
use crate::value::IntakeFields;

/// Maximum number of missing-field labels reported per tier.
///
/// Progress hints show at most this many labels regardless of how many
/// fields are actually incomplete; the counts still reflect all of them.
pub const MISSING_FIELD_DISPLAY_LIMIT: usize = 3;

/// Completion state of one tier for one record.
///
/// A derived projection, recomputed on every evaluation and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProgress {
    /// Number of effective required fields that are filled in.
    pub completed: usize,
    /// Total number of effective required fields.
    pub total: usize,
    /// `round(100 * completed / total)`; 100 when `total` is zero.
    pub percentage: u8,
    /// Whether every effective required field is filled in.
    pub is_ready: bool,
    /// Labels of incomplete fields, in field definition order, truncated
    /// to the first [`MISSING_FIELD_DISPLAY_LIMIT`] entries.
    pub missing_fields: Vec<String>,
}

/// A [`TierProgress`] tagged with the tier it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierReport {
    /// Name of the evaluated tier.
    pub tier: String,
    /// The tier's completion state.
    #[serde(flatten)]
    pub progress: TierProgress,
}

/// Whether the field at `key` counts as filled in.
///
/// Returns `false` for an absent key, an explicit null, a string whose
/// trimmed form is empty, or a zero-length list. Every other value —
/// including `false` booleans, zero, and empty maps — counts as
/// complete. Absent and present-but-empty are indistinguishable by
/// design.
pub fn is_field_complete(fields: &IntakeFields, key: &str) -> bool {
    match fields.get(key) {
        Some(value) => !value.is_empty(),
        None => false,
    }
}

/// Evaluate one tier of a record.
///
/// `own` is the target tier's field list; `lower` is the concatenation
/// of every lower tier's fields in ascending tier order (the caller owns
/// that composition — see [`TierTable::evaluate`](crate::tier::TierTable::evaluate)).
/// The effective required set is `lower` followed by `own` with
/// duplicate keys counted once, first occurrence winning.
pub fn evaluate_tier(
    fields: &IntakeFields,
    own: &[FieldRequirement],
    lower: &[FieldRequirement],
) -> TierProgress {
    let mut seen = std::collections::HashSet::new();
    let mut completed = 0usize;
    let mut total = 0usize;
    let mut missing_fields = Vec::new();

    for requirement in lower.iter().chain(own.iter()) {
        if !seen.insert(requirement.key.as_str()) {
            continue;
        }
        total += 1;
        if is_field_complete(fields, &requirement.key) {
            completed += 1;
        } else if missing_fields.len() < MISSING_FIELD_DISPLAY_LIMIT {
            missing_fields.push(requirement.label.clone());
        }
    }

    TierProgress {
        completed,
        total,
        percentage: percentage(completed, total),
        is_ready: completed == total,
        missing_fields,
    }
}

/// Integer percentage with round-half-up, defined as 100 for an empty set.
fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((100 * completed + total / 2) / total) as u8
}
