//! Domain model for task tracking and audit logging.
//!
//! The task domain models task records, the audit log entries written
//! for each mutation, and the validation rules for free-text input,
//! while keeping all infrastructure concerns outside of the domain
//! boundary.

mod audit;
mod error;
mod ids;
mod task;

pub use audit::{AuditAction, AuditLog, ChangeSet, field};
pub use error::{ParseAuditActionError, TaskValidationError};
pub use ids::{AuditLogId, TaskId};
pub use task::{
    DESCRIPTION_MAX_CHARS, PersistedTaskData, TITLE_MAX_CHARS, Task, validate_description,
    validate_title,
};
