//! # Export Tier Table
//!
//! Defines the ordered set of named completion checkpoints ("tiers")
//! that gate each export action for a compliance record. A tier lists
//! its own required fields; its *effective* required set is the union of
//! those fields with every lower tier's fields, in definition order,
//! duplicates counted once.
//!
//! ## Design Decision
//!
//! The table is an explicit, immutable [`TierTable`] value passed to
//! the evaluator at call time rather than a module-level constant, so
//! evaluation stays a pure function testable in isolation. [`TierTable::export_default`] supplies the standard
//! EU AI Act export tiers as an ordinary constructor, and deployments
//! can load their own table from JSON or YAML — every path goes through
//! the validating constructor.

use serde::{Deserialize, Serialize};

use crate::error::TierTableError;
use crate::readiness::{evaluate_tier, TierReport};
use crate::value::IntakeFields;

/// One required form field and its human-readable display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRequirement {
    /// Field key as it appears in the intake record.
    pub key: String,
    /// Display name shown in "missing fields" hints.
    pub label: String,
}

impl FieldRequirement {
    /// Convenience constructor.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A named completion checkpoint.
///
/// Tiers are ordered within a [`TierTable`]; each inherits every lower
/// tier's fields in addition to its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Stable tier name (e.g., `"memo"`).
    pub name: String,
    /// Fields this tier requires beyond the lower tiers.
    pub fields: Vec<FieldRequirement>,
}

impl Tier {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, fields: Vec<FieldRequirement>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// An ordered, validated table of export tiers.
///
/// Construction enforces the table invariants (non-empty, unique tier
/// names, no duplicate keys within one tier, no empty keys or labels).
/// Duplicate keys *across* tiers are legal: a higher tier may restate a
/// lower tier's field, and the effective union counts it once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    /// Build a table from tiers in ascending order, validating invariants.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, TierTableError> {
        if tiers.is_empty() {
            return Err(TierTableError::Empty);
        }
        for (position, tier) in tiers.iter().enumerate() {
            if tier.name.trim().is_empty() {
                return Err(TierTableError::EmptyTierName { position });
            }
            if tiers[..position].iter().any(|t| t.name == tier.name) {
                return Err(TierTableError::DuplicateTierName {
                    name: tier.name.clone(),
                });
            }
            for (i, field) in tier.fields.iter().enumerate() {
                if field.key.trim().is_empty() {
                    return Err(TierTableError::EmptyFieldPart {
                        tier: tier.name.clone(),
                        part: "key",
                    });
                }
                if field.label.trim().is_empty() {
                    return Err(TierTableError::EmptyFieldPart {
                        tier: tier.name.clone(),
                        part: "label",
                    });
                }
                if tier.fields[..i].iter().any(|f| f.key == field.key) {
                    return Err(TierTableError::DuplicateFieldKey {
                        tier: tier.name.clone(),
                        key: field.key.clone(),
                    });
                }
            }
        }
        Ok(Self { tiers })
    }

    /// The standard EU AI Act export tier table.
    ///
    /// Three checkpoints gate the export actions: a risk memo, an
    /// evidence pack, and the full technical documentation file. Higher
    /// tiers inherit every lower tier's fields.
    pub fn export_default() -> Self {
        let tiers = vec![
            Tier::new(
                "memo",
                vec![
                    FieldRequirement::new("system_name", "System name"),
                    FieldRequirement::new("intended_purpose", "Intended purpose"),
                    FieldRequirement::new("provider_name", "Provider name"),
                    FieldRequirement::new("risk_tier", "Risk tier"),
                ],
            ),
            Tier::new(
                "evidence",
                vec![
                    FieldRequirement::new("deployment_context", "Deployment context"),
                    FieldRequirement::new("data_sources", "Data sources"),
                    FieldRequirement::new("human_oversight", "Human oversight measures"),
                    FieldRequirement::new("incident_contact", "Incident contact"),
                ],
            ),
            Tier::new(
                "full",
                vec![
                    FieldRequirement::new("technical_documentation", "Technical documentation"),
                    FieldRequirement::new("conformity_assessment", "Conformity assessment route"),
                    FieldRequirement::new("post_market_plan", "Post-market monitoring plan"),
                    FieldRequirement::new(
                        "registration_reference",
                        "EU database registration reference",
                    ),
                ],
            ),
        ];
        // The built-in table satisfies every constructor invariant; the
        // test suite keeps this honest.
        Self { tiers }
    }

    /// Parse and validate a table from a JSON array of tiers.
    pub fn from_json(s: &str) -> Result<Self, TierTableError> {
        let tiers: Vec<Tier> = serde_json::from_str(s)?;
        Self::new(tiers)
    }

    /// The tiers in ascending order.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Find a tier and its position by name.
    pub fn get(&self, name: &str) -> Option<(usize, &Tier)> {
        self.tiers
            .iter()
            .enumerate()
            .find(|(_, t)| t.name == name)
    }

    /// The effective required-field list for the tier at `index`:
    /// the union of all lower tiers' fields and the tier's own, in
    /// definition order, first occurrence of each key winning.
    pub fn effective_fields(&self, index: usize) -> Vec<&FieldRequirement> {
        let mut seen = std::collections::HashSet::new();
        self.tiers
            .iter()
            .take(index + 1)
            .flat_map(|t| t.fields.iter())
            .filter(|f| seen.insert(f.key.as_str()))
            .collect()
    }

    /// Evaluate one tier by name against a record's fields.
    ///
    /// Returns `None` for an unknown tier name. Composition mirrors the
    /// evaluator contract: the target tier's own fields plus the
    /// concatenated lower-tier fields in ascending order.
    pub fn evaluate(&self, fields: &IntakeFields, name: &str) -> Option<TierReport> {
        let (index, tier) = self.get(name)?;
        let lower: Vec<FieldRequirement> = self
            .tiers
            .iter()
            .take(index)
            .flat_map(|t| t.fields.iter().cloned())
            .collect();
        let progress = evaluate_tier(fields, &tier.fields, &lower);
        Some(TierReport {
            tier: tier.name.clone(),
            progress,
        })
    }

    /// Evaluate every tier in ascending order.
    pub fn evaluate_all(&self, fields: &IntakeFields) -> Vec<TierReport> {
        let mut reports = Vec::with_capacity(self.tiers.len());
        let mut lower: Vec<FieldRequirement> = Vec::new();
        for tier in &self.tiers {
            let progress = evaluate_tier(fields, &tier.fields, &lower);
            reports.push(TierReport {
                tier: tier.name.clone(),
                progress,
            });
            lower.extend(tier.fields.iter().cloned());
        }
        reports
    }
}

impl TryFrom<Vec<Tier>> for TierTable {
    type Error = TierTableError;

    fn try_from(tiers: Vec<Tier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<TierTable> for Vec<Tier> {
    fn from(table: TierTable) -> Self {
        table.tiers
    }
}
