//! Error types for task domain validation and parsing.

use super::task::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use thiserror::Error;

/// Errors returned while validating task free-text input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,

    /// The title exceeds the allowed length.
    #[error("title must not exceed {TITLE_MAX_CHARS} characters, got {0}")]
    TitleTooLong(usize),

    /// The description is empty after trimming.
    #[error("description is required")]
    EmptyDescription,

    /// The description exceeds the allowed length.
    #[error("description must not exceed {DESCRIPTION_MAX_CHARS} characters, got {0}")]
    DescriptionTooLong(usize),
}

/// Error returned while parsing audit actions from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown audit action: {0}")]
pub struct ParseAuditActionError(pub String);
