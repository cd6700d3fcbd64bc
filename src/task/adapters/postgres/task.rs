//! `PostgreSQL` repository implementation for task storage.

use super::{
    PgPool,
    models::{TaskRow, UpsertTaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId},
    ports::{PageRequest, TaskPage, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        let row = to_upsert_row(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&row)
                .on_conflict(tasks::id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }

    async fn find_page(&self, request: PageRequest) -> TaskRepositoryResult<TaskPage> {
        self.run_blocking(move |connection| {
            let total = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            let rows = tasks::table
                .order((tasks::created_at.desc(), tasks::id.asc()))
                .offset(to_sql_offset(request.offset()))
                .limit(i64::from(request.size()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows_to_page(rows, request, total))
        })
        .await
    }

    async fn search_page(
        &self,
        term: &str,
        request: PageRequest,
    ) -> TaskRepositoryResult<TaskPage> {
        let pattern = like_pattern(term);
        self.run_blocking(move |connection| {
            let matches = tasks::title
                .ilike(pattern.clone())
                .or(tasks::description.ilike(pattern.clone()));
            let total = tasks::table
                .filter(matches.clone())
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            let rows = tasks::table
                .filter(matches)
                .order((tasks::created_at.desc(), tasks::id.asc()))
                .offset(to_sql_offset(request.offset()))
                .limit(i64::from(request.size()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows_to_page(rows, request, total))
        })
        .await
    }
}

fn to_upsert_row(task: &Task) -> UpsertTaskRow {
    UpsertTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        created_at: task.created_at(),
    }
}

fn row_to_task(row: TaskRow) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        created_at: row.created_at,
    })
}

fn rows_to_page(rows: Vec<TaskRow>, request: PageRequest, total: i64) -> TaskPage {
    let items: Vec<Task> = rows.into_iter().map(row_to_task).collect();
    TaskPage::new(items, request, u64::try_from(total).unwrap_or_default())
}

fn to_sql_offset(offset: u64) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}

/// Builds a case-insensitive containment pattern, escaping the `LIKE`
/// wildcards so the search term is matched literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
