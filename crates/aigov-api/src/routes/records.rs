//! # Intake Records — CRUD API
//!
//! Handles the lifecycle of compliance intake records: creation, field
//! editing, and removal. Readiness evaluation over these records lives
//! in [`super::readiness`].
//!
//! ## Endpoints
//!
//! - `POST /v1/records` — create a record
//! - `GET /v1/records` — list records
//! - `GET /v1/records/{id}` — get a record
//! - `PUT /v1/records/{id}/fields` — merge field values into a record
//! - `DELETE /v1/records/{id}` — delete a record

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use aigov_core::IntakeFields;

use crate::error::AppError;
use crate::payload::{check_field_keys, extract_json};
use crate::state::{AppState, RecordEntry};

// ── Request DTOs ────────────────────────────────────────────────────

/// Request to create a new intake record, optionally pre-filled.
#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    /// Initial field values (may be empty).
    #[serde(default)]
    pub fields: IntakeFields,
}

/// Request to merge field values into an existing record.
#[derive(Debug, Deserialize)]
pub struct UpdateFieldsRequest {
    /// Field values to write. Existing keys are overwritten; keys not
    /// listed here are left untouched.
    pub fields: IntakeFields,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the records router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/records", get(list_records).post(create_record))
        .route("/v1/records/{id}", get(get_record).delete(delete_record))
        .route("/v1/records/{id}/fields", put(update_fields))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /v1/records — create a new intake record.
async fn create_record(
    State(state): State<AppState>,
    body: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RecordEntry>), AppError> {
    let req = extract_json(body)?;
    check_field_keys(&req.fields)?;

    let entry = state.records.create(req.fields);
    tracing::info!(record = %entry.id, fields = entry.fields.len(), "intake record created");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /v1/records — list all intake records.
async fn list_records(State(state): State<AppState>) -> Json<Vec<RecordEntry>> {
    Json(state.records.list())
}

/// GET /v1/records/{id} — get a single record.
async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecordEntry>, AppError> {
    state
        .records
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("record {id} not found")))
}

/// PUT /v1/records/{id}/fields — merge field values into a record.
///
/// This mirrors the field-by-field editing model: each save merges the
/// submitted values over the stored ones. Setting a key to `null`
/// explicitly empties it without removing it.
async fn update_fields(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateFieldsRequest>, JsonRejection>,
) -> Result<Json<RecordEntry>, AppError> {
    let req = extract_json(body)?;
    check_field_keys(&req.fields)?;
    state
        .records
        .merge_fields(&id, req.fields)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("record {id} not found")))
}

/// DELETE /v1/records/{id} — delete a record.
async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .records
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| AppError::NotFound(format!("record {id} not found")))
}
