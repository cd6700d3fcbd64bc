//! Audit log entries recording task mutations.

use super::{AuditLogId, ParseAuditActionError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field names used as [`ChangeSet`] keys.
pub mod field {
    /// Key for the task title.
    pub const TITLE: &str = "title";
    /// Key for the task description.
    pub const DESCRIPTION: &str = "description";
}

/// The kind of task mutation an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditAction {
    /// A task was created.
    #[serde(rename = "Create Task")]
    Create,
    /// A task's title or description changed.
    #[serde(rename = "Update Task")]
    Update,
    /// A task was physically deleted.
    #[serde(rename = "Delete Task")]
    Delete,
}

impl AuditAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "Create Task",
            Self::Update => "Update Task",
            Self::Delete => "Delete Task",
        }
    }
}

impl TryFrom<&str> for AuditAction {
    type Error = ParseAuditActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Create Task" => Ok(Self::Create),
            "Update Task" => Ok(Self::Update),
            "Delete Task" => Ok(Self::Delete),
            _ => Err(ParseAuditActionError(value.to_owned())),
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered field-name to new-value mapping computed during an update.
///
/// The change set decides whether an update writes an audit entry and
/// doubles as that entry's payload.
///
/// # Examples
///
/// ```rust
/// use tasktrail::task::domain::{ChangeSet, field};
///
/// let mut changes = ChangeSet::new();
/// assert!(changes.is_empty());
/// changes.record(field::TITLE, "Buy milk");
/// assert_eq!(changes.get(field::TITLE), Some("Buy milk"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet(BTreeMap<String, String>);

impl ChangeSet {
    /// Creates an empty change set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records a new value for the given field.
    pub fn record(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Returns the recorded value for the given field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns `true` when no field changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of changed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Immutable record of one mutation against a task.
///
/// Entries are append-only: once written they are never mutated or
/// deleted, and `task_id` is a weak reference that may outlive the
/// task it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    /// Audit entry identifier.
    pub id: AuditLogId,
    /// Time the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// The kind of mutation recorded.
    pub action: AuditAction,
    /// Identifier of the task the mutation applied to.
    pub task_id: TaskId,
    /// New field values, when the mutation carried any.
    pub updated_content: Option<ChangeSet>,
    /// Free-form operator notes. Currently always unset.
    pub notes: Option<String>,
}

impl AuditLog {
    /// Records a new audit entry with a timestamp taken from the
    /// injected clock.
    #[must_use]
    pub fn record(
        action: AuditAction,
        task_id: TaskId,
        updated_content: Option<ChangeSet>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: AuditLogId::new(),
            timestamp: clock.utc(),
            action,
            task_id,
            updated_content,
            notes: None,
        }
    }
}
