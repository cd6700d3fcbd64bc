//! Repository port for task persistence, lookup, and paginated listing.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// A zero-based page request.
///
/// Callers are expected to pass `size >= 1`; the repositories do not
/// re-clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Creates a page request for the given zero-based page index and
    /// page size.
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Returns the number of items preceding this page.
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.page as u64 * self.size as u64
    }
}

/// One page of task results with pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPage {
    /// Tasks on this page, ordered by creation time descending.
    pub items: Vec<Task>,
    /// Zero-based index of this page.
    pub page: u32,
    /// Total number of matching tasks across all pages.
    pub total_items: u64,
    /// Total number of pages derived from the count and page size.
    pub total_pages: u64,
}

impl TaskPage {
    /// Assembles a page from its items and the total matching count.
    #[must_use]
    pub fn new(items: Vec<Task>, request: PageRequest, total_items: u64) -> Self {
        let total_pages = if request.size() == 0 {
            0
        } else {
            total_items.div_ceil(u64::from(request.size()))
        };
        Self {
            items,
            page: request.page(),
            total_items,
            total_pages,
        }
    }
}

/// Task persistence contract.
///
/// Listing is always ordered by creation timestamp descending (ties
/// broken by identifier so pages are deterministic). Search matches
/// the term as a case-insensitive substring of the title or the
/// description; that policy is part of this contract and both adapters
/// implement it.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a task, replacing any existing record with the same
    /// identifier.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Physically deletes a task by identifier.
    ///
    /// Returns `true` when a record was removed and `false` when no
    /// task with the identifier existed.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Returns one page of the full task collection.
    async fn find_page(&self, request: PageRequest) -> TaskRepositoryResult<TaskPage>;

    /// Returns one page of the tasks whose title or description
    /// contains the (already trimmed) search term.
    async fn search_page(&self, term: &str, request: PageRequest)
    -> TaskRepositoryResult<TaskPage>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
