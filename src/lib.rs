//! Tasktrail: a task-tracking REST backend with an audit trail.
//!
//! Clients create, list, update, and delete tasks over HTTP; every
//! successful mutation is recorded to an append-only audit log. Access
//! is gated by a single shared basic-auth credential pair checked on
//! each request, and free-text fields are HTML-sanitised before they
//! reach storage.
//!
//! # Architecture
//!
//! Tasktrail follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task records, the audit log, and the orchestration service
//! - [`api`]: HTTP routing, DTO validation, and basic-auth gating
//! - [`config`]: Immutable process configuration loaded at startup

pub mod api;
pub mod config;
pub mod task;
