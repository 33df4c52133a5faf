//! # Error Types
//!
//! Structured errors for tier table construction. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The readiness evaluator itself has no error taxonomy: it performs no
//! I/O and treats malformed or missing field data as the single outcome
//! "field incomplete". The only failure surface in this crate is the
//! validating [`TierTable`](crate::tier::TierTable) constructor, which
//! rejects malformed configuration before any evaluation runs.

use thiserror::Error;

/// Errors raised while constructing or deserializing a tier table.
#[derive(Error, Debug)]
pub enum TierTableError {
    /// The table contained no tiers at all.
    #[error("tier table must contain at least one tier")]
    Empty,

    /// A tier was declared with an empty name.
    #[error("tier at position {position} has an empty name")]
    EmptyTierName {
        /// Zero-based position of the offending tier.
        position: usize,
    },

    /// Two tiers share the same name.
    #[error("duplicate tier name: {name:?}")]
    DuplicateTierName {
        /// The name that appeared more than once.
        name: String,
    },

    /// One tier listed the same field key twice.
    #[error("tier {tier:?} declares field key {key:?} more than once")]
    DuplicateFieldKey {
        /// The tier containing the duplicate.
        tier: String,
        /// The repeated field key.
        key: String,
    },

    /// A field requirement had an empty key or label.
    #[error("tier {tier:?} declares a field with an empty {part}")]
    EmptyFieldPart {
        /// The tier containing the malformed field.
        tier: String,
        /// Which part was empty: "key" or "label".
        part: &'static str,
    },

    /// The table could not be parsed from its serialized form.
    #[error("invalid tier table: {0}")]
    Parse(#[from] serde_json::Error),
}
