//! # Export Readiness API
//!
//! Evaluates intake records against the active tier table. Evaluation is
//! pure and recomputed per request; nothing here is cached or stored.
//!
//! ## Endpoints
//!
//! - `GET /v1/records/{id}/readiness` — full tier report for a stored record
//! - `POST /v1/readiness` — stateless evaluation of supplied field values
//! - `GET /v1/tiers` — describe the active tier table

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aigov_core::{IntakeFields, RecordId, TierReport};

use crate::error::AppError;
use crate::payload::extract_json;
use crate::state::AppState;

// ── DTOs ────────────────────────────────────────────────────────────

/// Readiness report for one stored record.
#[derive(Debug, Serialize)]
pub struct ReadinessReport {
    /// The evaluated record; absent for stateless evaluations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<RecordId>,
    /// When this evaluation ran. Reports are projections, not state:
    /// two calls with unchanged fields produce identical tier results.
    pub evaluated_at: DateTime<Utc>,
    /// Per-tier completion, ascending tier order.
    pub tiers: Vec<TierReport>,
}

/// Stateless evaluation request: field values that are not stored.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// Field values to evaluate.
    #[serde(default)]
    pub fields: IntakeFields,
}

/// Optional tier filter for readiness queries.
#[derive(Debug, Deserialize)]
pub struct TierFilter {
    /// Evaluate only the named tier.
    pub tier: Option<String>,
}

/// One row of the tier table description.
#[derive(Debug, Serialize)]
pub struct TierSummary {
    /// Tier name.
    pub name: String,
    /// Number of fields this tier adds beyond the lower tiers.
    pub own_fields: usize,
    /// Effective required-field count including inherited fields.
    pub effective_total: usize,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the readiness router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/records/{id}/readiness", get(record_readiness))
        .route("/v1/readiness", post(evaluate_fields))
        .route("/v1/tiers", get(describe_tiers))
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /v1/records/{id}/readiness — evaluate a stored record.
///
/// With `?tier=NAME` the report contains only that tier; an unknown
/// name is a 404.
async fn record_readiness(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(filter): Query<TierFilter>,
) -> Result<Json<ReadinessReport>, AppError> {
    let entry = state
        .records
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("record {id} not found")))?;

    let tiers = evaluate(&state, &entry.fields, filter.tier.as_deref())?;
    Ok(Json(ReadinessReport {
        record_id: Some(entry.id),
        evaluated_at: Utc::now(),
        tiers,
    }))
}

/// POST /v1/readiness — evaluate supplied field values without storing them.
///
/// This is the raw evaluator surface: the caller owns the field state
/// (e.g., an unsaved editing session) and receives the same tier reports
/// a stored record would.
async fn evaluate_fields(
    State(state): State<AppState>,
    Query(filter): Query<TierFilter>,
    body: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<ReadinessReport>, AppError> {
    let req = extract_json(body)?;
    let tiers = evaluate(&state, &req.fields, filter.tier.as_deref())?;
    Ok(Json(ReadinessReport {
        record_id: None,
        evaluated_at: Utc::now(),
        tiers,
    }))
}

/// GET /v1/tiers — describe the active tier table.
async fn describe_tiers(State(state): State<AppState>) -> Json<Vec<TierSummary>> {
    let summaries = state
        .tiers
        .tiers()
        .iter()
        .enumerate()
        .map(|(index, tier)| TierSummary {
            name: tier.name.clone(),
            own_fields: tier.fields.len(),
            effective_total: state.tiers.effective_fields(index).len(),
        })
        .collect();
    Json(summaries)
}

/// Evaluate all tiers, or just the named one.
fn evaluate(
    state: &AppState,
    fields: &IntakeFields,
    tier: Option<&str>,
) -> Result<Vec<TierReport>, AppError> {
    match tier {
        Some(name) => {
            let report = state
                .tiers
                .evaluate(fields, name)
                .ok_or_else(|| AppError::NotFound(format!("tier {name:?} not found")))?;
            Ok(vec![report])
        }
        None => Ok(state.tiers.evaluate_all(fields)),
    }
}
