//! Repository port for append-only audit log persistence.

use crate::task::domain::{AuditLog, AuditLogId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for audit log repository operations.
pub type AuditLogRepositoryResult<T> = Result<T, AuditLogRepositoryError>;

/// Audit log persistence contract.
///
/// The log is append-only: entries are never mutated or deleted after
/// they are written.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Appends a new audit entry.
    ///
    /// # Errors
    ///
    /// Returns [`AuditLogRepositoryError::DuplicateEntry`] when an
    /// entry with the same identifier already exists.
    async fn append(&self, entry: &AuditLog) -> AuditLogRepositoryResult<()>;

    /// Returns all audit entries ordered by timestamp descending.
    ///
    /// The result is unfiltered and unpaginated, fetched fresh on each
    /// call.
    async fn find_all_by_timestamp_desc(&self) -> AuditLogRepositoryResult<Vec<AuditLog>>;
}

/// Errors returned by audit log repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AuditLogRepositoryError {
    /// An entry with the same identifier already exists.
    #[error("duplicate audit entry: {0}")]
    DuplicateEntry(AuditLogId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuditLogRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
