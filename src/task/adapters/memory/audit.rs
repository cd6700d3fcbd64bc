//! Thread-safe in-memory audit log repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::AuditLog,
    ports::{AuditLogRepository, AuditLogRepositoryError, AuditLogRepositoryResult},
};

/// Thread-safe in-memory audit log repository.
///
/// Entries are held in append order; listing reverses that order and
/// stable-sorts by timestamp, so entries sharing a timestamp come back
/// latest-appended first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLogRepository {
    state: Arc<RwLock<Vec<AuditLog>>>,
}

impl InMemoryAuditLogRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn append(&self, entry: &AuditLog) -> AuditLogRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AuditLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.iter().any(|existing| existing.id == entry.id) {
            return Err(AuditLogRepositoryError::DuplicateEntry(entry.id));
        }
        state.push(entry.clone());
        Ok(())
    }

    async fn find_all_by_timestamp_desc(&self) -> AuditLogRepositoryResult<Vec<AuditLog>> {
        let state = self.state.read().map_err(|err| {
            AuditLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut entries: Vec<AuditLog> = state.iter().rev().cloned().collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }
}
