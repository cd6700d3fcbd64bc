//! In-memory adapters for the task and audit log ports.
//!
//! These back the server when no database is configured and double as
//! the repositories used by the service and router tests.

mod audit;
mod task;

pub use audit::InMemoryAuditLogRepository;
pub use task::InMemoryTaskRepository;
