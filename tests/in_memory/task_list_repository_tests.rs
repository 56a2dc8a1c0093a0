//! Contract tests for the in-memory task list repository.

use super::helpers::{at, task_list_at, task_lists};
use docket::task::{
    adapters::memory::InMemoryTaskListRepository,
    domain::{TaskList, TaskListId},
    ports::{Page, RepositoryError, TaskListRepository},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_returns_stored_list(task_lists: InMemoryTaskListRepository) {
    let task_list = task_list_at("Inbox", 0);

    let stored = task_lists.create(&task_list).await.expect("create");
    let fetched = task_lists.get(task_list.id()).await.expect("get");

    assert_eq!(stored, task_list);
    assert_eq!(fetched, Some(task_list));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_duplicate_identifier(task_lists: InMemoryTaskListRepository) {
    let task_list = task_list_at("Inbox", 0);
    task_lists.create(&task_list).await.expect("create");

    let result = task_lists.create(&task_list).await;

    assert!(matches!(
        result,
        Err(RepositoryError::DuplicateTaskList(id)) if id == task_list.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_name_and_timestamp(task_lists: InMemoryTaskListRepository) {
    let mut task_list = task_list_at("Inbox", 0);
    task_lists.create(&task_list).await.expect("create");
    task_list.rename("Today", &at(60)).expect("rename");

    let updated = task_lists.update(&task_list).await.expect("update");

    assert_eq!(updated.name().as_str(), "Today");
    assert_eq!(updated.updated_at(), Some(at(60).0));
    let fetched = task_lists.get(task_list.id()).await.expect("get");
    assert_eq!(fetched, Some(task_list));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_list_is_not_found(task_lists: InMemoryTaskListRepository) {
    let task_list = task_list_at("Inbox", 0);

    let result = task_lists.update(&task_list).await;

    assert!(matches!(result, Err(RepositoryError::TaskListNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_whether_a_record_was_removed(task_lists: InMemoryTaskListRepository) {
    let task_list = task_list_at("Inbox", 0);
    task_lists.create(&task_list).await.expect("create");

    assert!(task_lists.delete(task_list.id()).await.expect("delete"));
    assert!(!task_lists.delete(task_list.id()).await.expect("delete"));
    assert!(!task_lists.delete(TaskListId::new()).await.expect("delete"));
    assert!(task_lists.get(task_list.id()).await.expect("get").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_pages_in_creation_order(task_lists: InMemoryTaskListRepository) {
    // Inserted newest first to show ordering does not follow insertion.
    let mut expected = Vec::new();
    for seconds in (0..5).rev() {
        let task_list = task_list_at(&format!("list {seconds}"), seconds);
        task_lists.create(&task_list).await.expect("create");
        expected.push(task_list);
    }
    expected.sort_by_key(|task_list| (task_list.created_at(), task_list.id()));

    let mut seen: Vec<TaskList> = Vec::new();
    for offset in [0, 2, 4, 6] {
        let page = task_lists
            .list(Page::new(offset, 2))
            .await
            .expect("list");
        seen.extend(page);
    }

    assert_eq!(seen, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_with_zero_limit_is_empty(task_lists: InMemoryTaskListRepository) {
    task_lists
        .create(&task_list_at("Inbox", 0))
        .await
        .expect("create");

    let page = task_lists.list(Page::new(0, 0)).await.expect("list");

    assert!(page.is_empty());
}
