//! Application services orchestrating task mutations and audit writes.

mod tasks;

pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
