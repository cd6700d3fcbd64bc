//! Thread-safe in-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{PageRequest, TaskPage, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sorts tasks newest-first, breaking creation-time ties by identifier
/// so page boundaries are deterministic.
fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| a.id().cmp(&b.id()))
    });
}

/// Cuts one page out of an already-sorted result set.
fn paginate(mut tasks: Vec<Task>, request: PageRequest) -> TaskPage {
    sort_newest_first(&mut tasks);
    let total_items = tasks.len() as u64;
    let items: Vec<Task> = tasks
        .into_iter()
        .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
        .take(request.size() as usize)
        .collect();
    TaskPage::new(items, request, total_items)
}

/// Case-insensitive substring match over title and description.
fn matches_term(task: &Task, needle_lower: &str) -> bool {
    task.title().to_lowercase().contains(needle_lower)
        || task.description().to_lowercase().contains(needle_lower)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.remove(&id).is_some())
    }

    async fn find_page(&self, request: PageRequest) -> TaskRepositoryResult<TaskPage> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let tasks: Vec<Task> = state.values().cloned().collect();
        Ok(paginate(tasks, request))
    }

    async fn search_page(
        &self,
        term: &str,
        request: PageRequest,
    ) -> TaskRepositoryResult<TaskPage> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let needle_lower = term.to_lowercase();
        let tasks: Vec<Task> = state
            .values()
            .filter(|task| matches_term(task, &needle_lower))
            .cloned()
            .collect();
        Ok(paginate(tasks, request))
    }
}
