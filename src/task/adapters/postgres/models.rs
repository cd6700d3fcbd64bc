//! Diesel row models for task and audit log persistence.

use super::schema::{audit_logs, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Sanitised title.
    pub title: String,
    /// Sanitised description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert/update model for task records.
///
/// Doubles as the `ON CONFLICT` change set; the derive skips the
/// primary key, so an upsert never rewrites `id`.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct UpsertTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Sanitised title.
    pub title: String,
    /// Sanitised description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for audit log entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = audit_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuditLogRow {
    /// Audit entry identifier.
    pub id: uuid::Uuid,
    /// Time the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// Recorded action label.
    pub action: String,
    /// Identifier of the mutated task.
    pub task_id: uuid::Uuid,
    /// New field values as JSON, when present.
    pub updated_content: Option<Value>,
    /// Free-form operator notes.
    pub notes: Option<String>,
}

/// Insert model for audit log entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = audit_logs)]
pub struct NewAuditLogRow {
    /// Audit entry identifier.
    pub id: uuid::Uuid,
    /// Time the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// Recorded action label.
    pub action: String,
    /// Identifier of the mutated task.
    pub task_id: uuid::Uuid,
    /// New field values as JSON, when present.
    pub updated_content: Option<Value>,
    /// Free-form operator notes.
    pub notes: Option<String>,
}
