//! Route configuration for the task API.
//!
//! | Method | Path             | Handler           |
//! |--------|------------------|-------------------|
//! | GET    | /api/tasks       | `list_tasks`      |
//! | POST   | /api/tasks       | `create_task`     |
//! | PUT    | /api/tasks/{id}  | `update_task`     |
//! | DELETE | /api/tasks/{id}  | `delete_task`     |
//! | GET    | /api/logs        | `list_audit_logs` |
//!
//! Every route sits behind the basic-auth middleware; CORS and request
//! tracing wrap the whole router.

use super::auth::require_basic_auth;
use super::handlers;
use super::state::AppState;
use crate::config::AuthConfig;
use crate::task::ports::{AuditLogRepository, TaskRepository};
use axum::Router;
use axum::middleware;
use axum::routing::get;
use mockable::Clock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the axum router with all API routes and middleware.
pub fn create_router<R, A, C>(state: AppState<R, A, C>, credentials: AuthConfig) -> Router
where
    R: TaskRepository + 'static,
    A: AuditLogRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let api = Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<R, A, C>).post(handlers::create_task::<R, A, C>),
        )
        .route(
            "/tasks/{id}",
            axum::routing::put(handlers::update_task::<R, A, C>)
                .delete(handlers::delete_task::<R, A, C>),
        )
        .route("/logs", get(handlers::list_audit_logs::<R, A, C>));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            credentials,
            require_basic_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

/// Permissive CORS for browser clients; preflights are answered before
/// the auth gate runs.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
