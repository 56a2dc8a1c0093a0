//! Contract tests for the in-memory task repository.

use super::helpers::{at, task_at, tasks};
use docket::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskListId},
    ports::{Page, RepositoryError, TaskRepository},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_returns_stored_task(tasks: InMemoryTaskRepository) {
    let task = task_at(TaskListId::new(), "t1", 0);

    tasks.create(&task).await.expect("create");

    assert_eq!(tasks.get(task.id()).await.expect("get"), Some(task));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_duplicate_identifier(tasks: InMemoryTaskRepository) {
    let task = task_at(TaskListId::new(), "t1", 0);
    tasks.create(&task).await.expect("create");

    let result = tasks.create(&task).await;

    assert!(matches!(result, Err(RepositoryError::DuplicateTask(id)) if id == task.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_completion(tasks: InMemoryTaskRepository) {
    let mut task = task_at(TaskListId::new(), "t1", 0);
    tasks.create(&task).await.expect("create");
    task.mark_completed(&at(30));

    tasks.update(&task).await.expect("update");

    let fetched = tasks
        .get(task.id())
        .await
        .expect("get")
        .expect("task should exist");
    assert!(fetched.is_completed());
    assert_eq!(fetched.completed_at(), Some(at(30).0));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_task_is_not_found(tasks: InMemoryTaskRepository) {
    let task = task_at(TaskListId::new(), "t1", 0);

    let result = tasks.update(&task).await;

    assert!(matches!(result, Err(RepositoryError::TaskNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_by_task_list_is_scoped_and_ordered(tasks: InMemoryTaskRepository) {
    let inbox = TaskListId::new();
    let other = TaskListId::new();
    let later = task_at(inbox, "later", 10);
    let earlier = task_at(inbox, "earlier", 5);
    tasks.create(&later).await.expect("create");
    tasks.create(&earlier).await.expect("create");
    tasks.create(&task_at(other, "elsewhere", 1)).await.expect("create");

    let listed = tasks
        .list_by_task_list(inbox, Page::default())
        .await
        .expect("list");

    assert_eq!(listed, vec![earlier, later]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_disappears_from_its_list(tasks: InMemoryTaskRepository) {
    let inbox = TaskListId::new();
    let task = task_at(inbox, "t1", 0);
    tasks.create(&task).await.expect("create");

    assert!(tasks.delete(task.id()).await.expect("delete"));
    assert!(!tasks.delete(task.id()).await.expect("delete"));
    assert!(!tasks.delete(TaskId::new()).await.expect("delete"));

    let listed = tasks
        .list_by_task_list(inbox, Page::default())
        .await
        .expect("list");
    assert!(listed.is_empty());
    assert!(tasks.get(task.id()).await.expect("get").is_none());
}
