//! Shared application state for the HTTP layer.

use crate::task::{
    ports::{AuditLogRepository, TaskRepository},
    services::TaskService,
};
use mockable::Clock;
use std::sync::Arc;

/// Application state handed to every handler.
///
/// Holds the task service behind an [`Arc`]; cloning the state is
/// cheap and does not duplicate the underlying stores.
pub struct AppState<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    service: Arc<TaskService<R, A, C>>,
}

impl<R, A, C> AppState<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    /// Creates application state around a task service.
    #[must_use]
    pub fn new(service: TaskService<R, A, C>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns the task service.
    #[must_use]
    pub fn service(&self) -> &TaskService<R, A, C> {
        &self.service
    }
}

impl<R, A, C> Clone for AppState<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
