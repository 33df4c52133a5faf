//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor: the in-memory intake record store and the
//! active tier table.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aigov_core::{IntakeFields, RecordId, TierTable};

// -- Intake Records -----------------------------------------------------------

/// A stored compliance intake record.
///
/// The field map is the live editing state; readiness is recomputed from
/// it on every evaluation request and never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Record identifier.
    pub id: RecordId,
    /// Current field values.
    pub fields: IntakeFields,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the field values were last written.
    pub updated_at: DateTime<Utc>,
}

/// In-memory store of intake records under active editing.
///
/// Owns the record lifecycle: identifiers and timestamps are assigned
/// here, so a handler can never insert an entry with a forged id or a
/// stale `updated_at`. Clones share the underlying map. The lock is
/// `parking_lot`, not `tokio::sync`, because it is never held across an
/// `.await` point.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<RwLock<HashMap<Uuid, RecordEntry>>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with the given initial field values.
    ///
    /// Assigns a fresh id; both timestamps start at now.
    pub fn create(&self, fields: IntakeFields) -> RecordEntry {
        let now = Utc::now();
        let entry = RecordEntry {
            id: RecordId::new(),
            fields,
            created_at: now,
            updated_at: now,
        };
        self.records.write().insert(*entry.id.as_uuid(), entry.clone());
        entry
    }

    /// Retrieve a record by id.
    pub fn get(&self, id: &Uuid) -> Option<RecordEntry> {
        self.records.read().get(id).cloned()
    }

    /// All records, oldest first (ties broken by id so the order is
    /// stable across calls).
    pub fn list(&self) -> Vec<RecordEntry> {
        let mut entries: Vec<_> = self.records.read().values().cloned().collect();
        entries.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        entries
    }

    /// Merge field values into a record, bumping `updated_at`.
    ///
    /// Submitted keys overwrite stored ones; keys not submitted are left
    /// untouched. Returns the updated entry, or `None` if the record
    /// does not exist.
    pub fn merge_fields(&self, id: &Uuid, fields: IntakeFields) -> Option<RecordEntry> {
        let mut guard = self.records.write();
        let entry = guard.get_mut(id)?;
        entry.fields.merge(fields);
        entry.updated_at = Utc::now();
        Some(entry.clone())
    }

    /// Remove a record, returning it if it existed.
    pub fn remove(&self, id: &Uuid) -> Option<RecordEntry> {
        self.records.write().remove(id)
    }
}

// -- AppState -----------------------------------------------------------------

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Intake records under active editing.
    pub records: RecordStore,
    /// The tier table readiness is evaluated against.
    pub tiers: Arc<TierTable>,
}

impl AppState {
    /// State with the built-in EU AI Act export tier table.
    pub fn new() -> Self {
        Self::with_table(TierTable::export_default())
    }

    /// State with a custom tier table.
    pub fn with_table(table: TierTable) -> Self {
        Self {
            records: RecordStore::new(),
            tiers: Arc::new(table),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
