//! HTTP surface for the task backend.
//!
//! Thin glue over [`crate::task::services::TaskService`]: axum routing,
//! request/response DTOs with validation, basic-auth gating, and
//! error-to-status mapping. All business behaviour lives in the
//! service; this layer only shapes requests and responses.

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;

#[cfg(test)]
mod tests;
