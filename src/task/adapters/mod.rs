//! Adapter implementations of the task and audit log ports.

pub mod memory;
pub mod postgres;
