//! `PostgreSQL` repository implementation for audit log storage.

use super::{
    PgPool,
    models::{AuditLogRow, NewAuditLogRow},
    schema::audit_logs,
};
use crate::task::{
    domain::{AuditAction, AuditLog, AuditLogId, ChangeSet, TaskId},
    ports::{AuditLogRepository, AuditLogRepositoryError, AuditLogRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed audit log repository.
#[derive(Debug, Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AuditLogRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AuditLogRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AuditLogRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AuditLogRepositoryError::persistence)?
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn append(&self, entry: &AuditLog) -> AuditLogRepositoryResult<()> {
        let entry_id = entry.id;
        let row = to_new_row(entry)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(audit_logs::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AuditLogRepositoryError::DuplicateEntry(entry_id)
                    }
                    _ => AuditLogRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_all_by_timestamp_desc(&self) -> AuditLogRepositoryResult<Vec<AuditLog>> {
        self.run_blocking(|connection| {
            let rows = audit_logs::table
                .order(audit_logs::timestamp.desc())
                .select(AuditLogRow::as_select())
                .load::<AuditLogRow>(connection)
                .map_err(AuditLogRepositoryError::persistence)?;
            rows.into_iter().map(row_to_entry).collect()
        })
        .await
    }
}

fn to_new_row(entry: &AuditLog) -> AuditLogRepositoryResult<NewAuditLogRow> {
    let updated_content = entry
        .updated_content
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(AuditLogRepositoryError::persistence)?;

    Ok(NewAuditLogRow {
        id: entry.id.into_inner(),
        timestamp: entry.timestamp,
        action: entry.action.as_str().to_owned(),
        task_id: entry.task_id.into_inner(),
        updated_content,
        notes: entry.notes.clone(),
    })
}

fn row_to_entry(row: AuditLogRow) -> AuditLogRepositoryResult<AuditLog> {
    let action = AuditAction::try_from(row.action.as_str())
        .map_err(AuditLogRepositoryError::persistence)?;
    let updated_content = row
        .updated_content
        .map(serde_json::from_value::<ChangeSet>)
        .transpose()
        .map_err(AuditLogRepositoryError::persistence)?;

    Ok(AuditLog {
        id: AuditLogId::from_uuid(row.id),
        timestamp: row.timestamp,
        action,
        task_id: TaskId::from_uuid(row.task_id),
        updated_content,
        notes: row.notes,
    })
}
