//! Service layer for task mutations, listing, and the audit trail.

use crate::task::{
    domain::{AuditAction, AuditLog, ChangeSet, Task, TaskId, field},
    ports::{
        AuditLogRepository, AuditLogRepositoryError, PageRequest, TaskPage, TaskRepository,
        TaskRepositoryError,
    },
    sanitize::sanitize,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Task storage failed. Propagated untouched from the repository.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Audit log storage failed. Propagated untouched from the
    /// repository.
    #[error(transparent)]
    Audit(#[from] AuditLogRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Each mutation sanitises its free-text input, applies the change to
/// the task store, and appends an audit entry. The two writes are not
/// atomic across the stores: when the audit write fails after the task
/// write succeeded, the error propagates and no compensating rollback
/// runs. The service holds no mutable state of its own; concurrent
/// updates to the same task race at the storage layer and resolve
/// last-write-wins.
#[derive(Clone)]
pub struct TaskService<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    audit: Arc<A>,
    clock: Arc<C>,
}

impl<R, A, C> TaskService<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service over the given stores and clock.
    #[must_use]
    pub const fn new(tasks: Arc<R>, audit: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            audit,
            clock,
        }
    }

    /// Creates a task from already-validated input and records a
    /// "Create Task" audit entry carrying the sanitised values.
    ///
    /// # Errors
    ///
    /// Returns a storage error when either the task write or the audit
    /// write fails.
    pub async fn create(&self, title: &str, description: &str) -> TaskServiceResult<Task> {
        let sanitized_title = sanitize(title);
        let sanitized_description = sanitize(description);

        let task = Task::new(sanitized_title, sanitized_description, &*self.clock);
        self.tasks.save(&task).await?;

        let mut content = ChangeSet::new();
        content.record(field::TITLE, task.title());
        content.record(field::DESCRIPTION, task.description());
        let entry = AuditLog::record(AuditAction::Create, task.id(), Some(content), &*self.clock);
        self.audit.append(&entry).await?;

        tracing::info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Updates a task's title and description, recording only the
    /// fields that actually changed.
    ///
    /// The task is saved unconditionally once loaded; the audit entry
    /// is written only when at least one sanitised field differs from
    /// the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not
    /// exist, or a storage error when a write fails.
    pub async fn update(
        &self,
        id: TaskId,
        title: &str,
        description: &str,
    ) -> TaskServiceResult<Task> {
        let Some(mut task) = self.tasks.find_by_id(id).await? else {
            return Err(TaskServiceError::NotFound(id));
        };

        let sanitized_title = sanitize(title);
        let sanitized_description = sanitize(description);

        let mut changes = ChangeSet::new();
        if task.title() != sanitized_title {
            changes.record(field::TITLE, &sanitized_title);
            task.set_title(sanitized_title);
        }
        if task.description() != sanitized_description {
            changes.record(field::DESCRIPTION, &sanitized_description);
            task.set_description(sanitized_description);
        }

        self.tasks.save(&task).await?;

        if !changes.is_empty() {
            let entry = AuditLog::record(AuditAction::Update, id, Some(changes), &*self.clock);
            self.audit.append(&entry).await?;
        }

        tracing::info!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Deletes a task and records a "Delete Task" audit entry with no
    /// content.
    ///
    /// Existence is checked before the physical delete so the audit
    /// entry is only written for a confirmed prior existence rather
    /// than a delete that was already a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not
    /// exist, or a storage error when a write fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        if self.tasks.find_by_id(id).await?.is_none() {
            return Err(TaskServiceError::NotFound(id));
        }

        self.tasks.delete_by_id(id).await?;

        let entry = AuditLog::record(AuditAction::Delete, id, None, &*self.clock);
        self.audit.append(&entry).await?;

        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Returns one page of tasks, newest first.
    ///
    /// A blank or absent search term lists the full collection; a
    /// non-blank term is trimmed and matched case-insensitively
    /// against title and description.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the listing query fails.
    pub async fn list(
        &self,
        request: PageRequest,
        search: Option<&str>,
    ) -> TaskServiceResult<TaskPage> {
        let term = search.map(str::trim).filter(|term| !term.is_empty());
        let page = match term {
            Some(needle) => self.tasks.search_page(needle, request).await?,
            None => self.tasks.find_page(request).await?,
        };
        Ok(page)
    }

    /// Returns the full audit trail, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the listing query fails.
    pub async fn audit_trail(&self) -> TaskServiceResult<Vec<AuditLog>> {
        let entries = self.audit.find_all_by_timestamp_desc().await?;
        Ok(entries)
    }
}
