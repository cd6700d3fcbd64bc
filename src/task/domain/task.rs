//! Task aggregate root and free-text validation rules.

use super::{TaskId, TaskValidationError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Validates a raw task title against the domain limits.
///
/// # Errors
///
/// Returns [`TaskValidationError::EmptyTitle`] when the title is blank
/// after trimming, or [`TaskValidationError::TitleTooLong`] when it
/// exceeds [`TITLE_MAX_CHARS`] characters.
pub fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if title.trim().is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    let length = title.chars().count();
    if length > TITLE_MAX_CHARS {
        return Err(TaskValidationError::TitleTooLong(length));
    }
    Ok(())
}

/// Validates a raw task description against the domain limits.
///
/// # Errors
///
/// Returns [`TaskValidationError::EmptyDescription`] when the
/// description is blank after trimming, or
/// [`TaskValidationError::DescriptionTooLong`] when it exceeds
/// [`DESCRIPTION_MAX_CHARS`] characters.
pub fn validate_description(description: &str) -> Result<(), TaskValidationError> {
    if description.trim().is_empty() {
        return Err(TaskValidationError::EmptyDescription);
    }
    let length = description.chars().count();
    if length > DESCRIPTION_MAX_CHARS {
        return Err(TaskValidationError::DescriptionTooLong(length));
    }
    Ok(())
}

/// Task aggregate root.
///
/// The creation timestamp is set once at construction and never
/// changes; only the title and description are mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a server-assigned identifier and a
    /// creation timestamp taken from the injected clock.
    ///
    /// Callers are expected to have validated and sanitised both text
    /// fields beforehand.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the task title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the task description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}
