//! # aigov-core — Foundational Types for the aigov Stack
//!
//! This crate is the bedrock of the aigov stack. It defines the intake
//! field model, the export tier table, and the readiness evaluator that
//! decides which export checkpoints a compliance record has reached.
//! Every other crate in the workspace depends on `aigov-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed sum type for field values.** [`FieldValue`] covers exactly
//!    {null, boolean, number, string, sequence, map}; "absent" is key
//!    absence in [`IntakeFields`]. Completeness is decided by exhaustive
//!    `match`, never by loose truthiness.
//!
//! 2. **Explicit, validated tier configuration.** [`TierTable`] is an
//!    ordinary immutable value passed into the evaluator — not ambient
//!    global state. Every table, including deserialized ones, passes
//!    through the validating constructor.
//!
//! 3. **Pure evaluation.** [`evaluate_tier`] is a deterministic function
//!    of its inputs: no hidden state, no I/O, no mutation. The produced
//!    [`TierProgress`] is a projection, never persisted.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aigov-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross a boundary.

pub mod error;
pub mod identity;
pub mod readiness;
pub mod tier;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::TierTableError;
pub use identity::RecordId;
pub use readiness::{
    evaluate_tier, is_field_complete, TierProgress, TierReport, MISSING_FIELD_DISPLAY_LIMIT,
};
pub use tier::{FieldRequirement, Tier, TierTable};
pub use value::{FieldValue, IntakeFields};
