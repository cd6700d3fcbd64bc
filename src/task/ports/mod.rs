//! Port contracts for task and audit log persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the task
//! service.

pub mod audit;
pub mod repository;

pub use audit::{AuditLogRepository, AuditLogRepositoryError, AuditLogRepositoryResult};
pub use repository::{
    PageRequest, TaskPage, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};
