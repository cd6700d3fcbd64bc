//! Request and response DTOs for the task API.

use crate::task::domain::{Task, TaskValidationError, validate_description, validate_title};
use crate::task::ports::TaskPage;
use serde::{Deserialize, Serialize};

/// Body for task creation and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Task title, required, at most 100 characters.
    pub title: String,
    /// Task description, required, at most 500 characters.
    pub description: String,
}

impl TaskRequest {
    /// Validates both fields against the domain limits.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskValidationError`] encountered.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        Ok(())
    }
}

/// Query parameters for the task listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListTasksQuery {
    /// Zero-based page index. Defaults to the first page.
    #[serde(default)]
    pub page: u32,
    /// Page size. Defaults to 5; must be at least 1.
    #[serde(default = "default_page_size")]
    pub size: u32,
    /// Optional substring to match against title or description.
    pub search: Option<String>,
}

const fn default_page_size() -> u32 {
    5
}

/// Response body for the task listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPageResponse {
    /// Tasks on this page, newest first.
    pub tasks: Vec<Task>,
    /// Zero-based index of this page.
    pub current_page: u32,
    /// Total number of matching tasks.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl From<TaskPage> for TaskPageResponse {
    fn from(page: TaskPage) -> Self {
        Self {
            tasks: page.items,
            current_page: page.page,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}

/// Response body carrying a human-readable confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The confirmation message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body carrying an error description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The error description.
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error response.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
