//! `PostgreSQL` adapters for task and audit log persistence.

mod audit;
mod models;
mod schema;
mod task;

pub use audit::PostgresAuditLogRepository;
pub use task::PostgresTaskRepository;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type shared by the adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;
