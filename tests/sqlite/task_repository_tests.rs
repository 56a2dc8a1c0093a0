//! Task repository tests against `SQLite`.

use super::helpers::{TestDatabase, at, repositories, task_at, task_list_at, test_database};
use docket::task::{
    domain::{Task, TaskId, TaskListId},
    ports::{Page, RepositoryError, TaskListRepository, TaskRepository},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_round_trips_every_field(test_database: TestDatabase) {
    let unit_of_work = test_database.begin().await;
    let (task_lists, tasks) = repositories(&unit_of_work);
    let inbox = task_list_at("Inbox", 0);
    task_lists.create(&inbox).await.expect("create list");
    let task = Task::new(inbox.id(), "t1", Some("details".to_owned()), &at(1)).expect("task");

    let stored = tasks.create(&task).await.expect("create task");
    let fetched = tasks.get(task.id()).await.expect("get");

    assert_eq!(stored, task);
    assert_eq!(fetched, Some(task));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_for_missing_list_is_rejected_by_foreign_key(test_database: TestDatabase) {
    let unit_of_work = test_database.begin().await;
    let (_, tasks) = repositories(&unit_of_work);
    let missing = TaskListId::new();

    let result = tasks.create(&task_at(missing, "orphan", 0)).await;

    assert!(matches!(
        result,
        Err(RepositoryError::UnknownTaskList(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_duplicate_identifier(test_database: TestDatabase) {
    let unit_of_work = test_database.begin().await;
    let (task_lists, tasks) = repositories(&unit_of_work);
    let inbox = task_list_at("Inbox", 0);
    task_lists.create(&inbox).await.expect("create list");
    let task = task_at(inbox.id(), "t1", 1);
    tasks.create(&task).await.expect("create task");

    let result = tasks.create(&task).await;

    assert!(matches!(result, Err(RepositoryError::DuplicateTask(id)) if id == task.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_completion_timestamp(test_database: TestDatabase) {
    let unit_of_work = test_database.begin().await;
    let (task_lists, tasks) = repositories(&unit_of_work);
    let inbox = task_list_at("Inbox", 0);
    task_lists.create(&inbox).await.expect("create list");
    let mut task = task_at(inbox.id(), "t1", 1);
    tasks.create(&task).await.expect("create task");
    task.mark_completed(&at(45));

    let updated = tasks.update(&task).await.expect("update");

    assert!(updated.is_completed());
    assert_eq!(updated.completed_at(), Some(at(45).0));
    assert_eq!(tasks.get(task.id()).await.expect("get"), Some(task));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_task_is_not_found(test_database: TestDatabase) {
    let unit_of_work = test_database.begin().await;
    let (_, tasks) = repositories(&unit_of_work);
    let task = task_at(TaskListId::new(), "t1", 0);

    let result = tasks.update(&task).await;

    assert!(matches!(result, Err(RepositoryError::TaskNotFound(id)) if id == task.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_by_task_list_pages_one_list_only(test_database: TestDatabase) {
    let unit_of_work = test_database.begin().await;
    let (task_lists, tasks) = repositories(&unit_of_work);
    let inbox = task_list_at("Inbox", 0);
    let other = task_list_at("Other", 0);
    task_lists.create(&inbox).await.expect("create list");
    task_lists.create(&other).await.expect("create list");
    let mut expected = Vec::new();
    for seconds in [5, 2, 9] {
        let task = task_at(inbox.id(), &format!("t{seconds}"), seconds);
        tasks.create(&task).await.expect("create task");
        expected.push(task);
    }
    tasks
        .create(&task_at(other.id(), "elsewhere", 1))
        .await
        .expect("create task");
    expected.sort_by_key(Task::created_at);

    let first = tasks
        .list_by_task_list(inbox.id(), Page::new(0, 2))
        .await
        .expect("list");
    let second = tasks
        .list_by_task_list(inbox.id(), Page::new(2, 2))
        .await
        .expect("list");

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    let seen: Vec<Task> = first.into_iter().chain(second).collect();
    assert_eq!(seen, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_list_cascades_to_its_tasks(test_database: TestDatabase) {
    let unit_of_work = test_database.begin().await;
    let (task_lists, tasks) = repositories(&unit_of_work);
    let inbox = task_list_at("Inbox", 0);
    task_lists.create(&inbox).await.expect("create list");
    let task = task_at(inbox.id(), "t1", 1);
    tasks.create(&task).await.expect("create task");

    assert!(task_lists.delete(inbox.id()).await.expect("delete list"));

    assert!(tasks.get(task.id()).await.expect("get").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_whether_a_task_was_removed(test_database: TestDatabase) {
    let unit_of_work = test_database.begin().await;
    let (task_lists, tasks) = repositories(&unit_of_work);
    let inbox = task_list_at("Inbox", 0);
    task_lists.create(&inbox).await.expect("create list");
    let task = task_at(inbox.id(), "t1", 1);
    tasks.create(&task).await.expect("create task");

    assert!(tasks.delete(task.id()).await.expect("delete"));
    assert!(tasks.get(task.id()).await.expect("get").is_none());
    assert!(!tasks.delete(task.id()).await.expect("delete"));
    assert!(!tasks.delete(TaskId::new()).await.expect("delete"));
}
