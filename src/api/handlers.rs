//! HTTP handlers for the task endpoints.
//!
//! Each handler validates its input, delegates to the task service,
//! and shapes the result; no business logic lives here.

use super::dto::{ListTasksQuery, MessageResponse, TaskPageResponse, TaskRequest};
use super::error::ApiError;
use super::state::AppState;
use crate::task::domain::{AuditLog, Task, TaskId};
use crate::task::ports::{AuditLogRepository, PageRequest, TaskRepository};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use mockable::Clock;
use uuid::Uuid;

/// GET /api/tasks - lists tasks with pagination and optional search.
pub async fn list_tasks<R, A, C>(
    State(state): State<AppState<R, A, C>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<TaskPageResponse>, ApiError>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    if query.size < 1 {
        return Err(ApiError::bad_request("size must be at least 1"));
    }
    let request = PageRequest::new(query.page, query.size);
    let page = state
        .service()
        .list(request, query.search.as_deref())
        .await?;
    Ok(Json(TaskPageResponse::from(page)))
}

/// POST /api/tasks - creates a task.
pub async fn create_task<R, A, C>(
    State(state): State<AppState<R, A, C>>,
    Json(request): Json<TaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    request.validate()?;
    let task = state
        .service()
        .create(&request.title, &request.description)
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/{id} - updates a task's title and description.
pub async fn update_task<R, A, C>(
    State(state): State<AppState<R, A, C>>,
    Path(id): Path<Uuid>,
    Json(request): Json<TaskRequest>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    request.validate()?;
    let task = state
        .service()
        .update(TaskId::from_uuid(id), &request.title, &request.description)
        .await?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id} - deletes a task.
pub async fn delete_task<R, A, C>(
    State(state): State<AppState<R, A, C>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    state.service().delete(TaskId::from_uuid(id)).await?;
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}

/// GET /api/logs - returns the full audit trail, newest first.
pub async fn list_audit_logs<R, A, C>(
    State(state): State<AppState<R, A, C>>,
) -> Result<Json<Vec<AuditLog>>, ApiError>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    let entries = state.service().audit_trail().await?;
    Ok(Json(entries))
}
