//! Task tracking with an append-only audit trail.
//!
//! This module implements the task/audit core: creating, updating, and
//! deleting task records, paginated and searchable listing, and the
//! audit log entries written alongside each successful mutation. Input
//! text is HTML-sanitised before persistence. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - The sanitisation policy in [`sanitize`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod sanitize;
pub mod services;

#[cfg(test)]
mod tests;
