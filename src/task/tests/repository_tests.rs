//! Behaviour tests for the in-memory adapters.

use crate::task::{
    adapters::memory::{InMemoryAuditLogRepository, InMemoryTaskRepository},
    domain::{AuditAction, AuditLog, AuditLogId, Task, TaskId},
    ports::{AuditLogRepository, AuditLogRepositoryError, PageRequest, TaskRepository},
};
use mockable::Clock;
use rstest::rstest;

use super::support::SteppingClock;

async fn seed_tasks(repository: &InMemoryTaskRepository, clock: &SteppingClock) -> Vec<Task> {
    let mut tasks = Vec::new();
    for (title, description) in [
        ("Buy milk", "from the corner shop"),
        ("Walk dog", "around the park"),
        ("Write report", "quarterly numbers"),
    ] {
        let task = Task::new(title, description, clock);
        repository.save(&task).await.expect("save should succeed");
        tasks.push(task);
    }
    tasks
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_replaces_existing_record_with_same_id() {
    let repository = InMemoryTaskRepository::new();
    let clock = SteppingClock::new();
    let mut task = Task::new("Buy milk", "urgent", &clock);
    repository.save(&task).await.expect("save should succeed");

    task.set_title("Buy oat milk");
    repository.save(&task).await.expect("resave should succeed");

    let fetched = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.title(), "Buy oat milk");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_when_missing() {
    let repository = InMemoryTaskRepository::new();
    let fetched = repository
        .find_by_id(TaskId::new())
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_by_id_reports_whether_a_record_was_removed() {
    let repository = InMemoryTaskRepository::new();
    let clock = SteppingClock::new();
    let task = Task::new("Buy milk", "urgent", &clock);
    repository.save(&task).await.expect("save should succeed");

    assert!(
        repository
            .delete_by_id(task.id())
            .await
            .expect("delete should succeed")
    );
    assert!(
        !repository
            .delete_by_id(task.id())
            .await
            .expect("repeat delete should succeed")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_page_orders_newest_first_and_computes_totals() {
    let repository = InMemoryTaskRepository::new();
    let clock = SteppingClock::new();
    let seeded = seed_tasks(&repository, &clock).await;

    let page = repository
        .find_page(PageRequest::new(0, 2))
        .await
        .expect("listing should succeed");

    let titles: Vec<&str> = page.items.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["Write report", "Walk dog"]);
    assert_eq!(page.page, 0);
    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 2);

    let last = repository
        .find_page(PageRequest::new(1, 2))
        .await
        .expect("listing should succeed");
    let last_titles: Vec<&str> = last.items.iter().map(Task::title).collect();
    assert_eq!(last_titles, vec![seeded[0].title()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_page_beyond_end_is_empty_but_keeps_totals() {
    let repository = InMemoryTaskRepository::new();
    let clock = SteppingClock::new();
    seed_tasks(&repository, &clock).await;

    let page = repository
        .find_page(PageRequest::new(5, 2))
        .await
        .expect("listing should succeed");
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_matches_title_or_description_case_insensitively() {
    let repository = InMemoryTaskRepository::new();
    let clock = SteppingClock::new();
    seed_tasks(&repository, &clock).await;

    let by_title = repository
        .search_page("MILK", PageRequest::new(0, 5))
        .await
        .expect("search should succeed");
    let titles: Vec<&str> = by_title.items.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["Buy milk"]);

    let by_description = repository
        .search_page("park", PageRequest::new(0, 5))
        .await
        .expect("search should succeed");
    let matched: Vec<&str> = by_description.items.iter().map(Task::title).collect();
    assert_eq!(matched, vec!["Walk dog"]);

    let none = repository
        .search_page("nowhere", PageRequest::new(0, 5))
        .await
        .expect("search should succeed");
    assert!(none.items.is_empty());
    assert_eq!(none.total_items, 0);
    assert_eq!(none.total_pages, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn audit_append_rejects_duplicate_identifiers() {
    let repository = InMemoryAuditLogRepository::new();
    let clock = SteppingClock::new();
    let entry = AuditLog::record(AuditAction::Create, TaskId::new(), None, &clock);

    repository
        .append(&entry)
        .await
        .expect("first append should succeed");
    let result = repository.append(&entry).await;
    assert!(matches!(
        result,
        Err(AuditLogRepositoryError::DuplicateEntry(id)) if id == entry.id
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn audit_listing_is_newest_first() {
    let repository = InMemoryAuditLogRepository::new();
    let clock = SteppingClock::new();
    let first = AuditLog::record(AuditAction::Create, TaskId::new(), None, &clock);
    let second = AuditLog::record(AuditAction::Update, TaskId::new(), None, &clock);
    repository
        .append(&first)
        .await
        .expect("append should succeed");
    repository
        .append(&second)
        .await
        .expect("append should succeed");

    let entries = repository
        .find_all_by_timestamp_desc()
        .await
        .expect("listing should succeed");
    let ids: Vec<AuditLogId> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn audit_listing_breaks_timestamp_ties_latest_appended_first() {
    let repository = InMemoryAuditLogRepository::new();
    let clock = SteppingClock::new();
    let timestamp = clock.utc();
    let first = AuditLog {
        id: AuditLogId::new(),
        timestamp,
        action: AuditAction::Create,
        task_id: TaskId::new(),
        updated_content: None,
        notes: None,
    };
    let second = AuditLog {
        id: AuditLogId::new(),
        timestamp,
        action: AuditAction::Delete,
        task_id: TaskId::new(),
        updated_content: None,
        notes: None,
    };
    repository
        .append(&first)
        .await
        .expect("append should succeed");
    repository
        .append(&second)
        .await
        .expect("append should succeed");

    let entries = repository
        .find_all_by_timestamp_desc()
        .await
        .expect("listing should succeed");
    let ids: Vec<AuditLogId> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}
