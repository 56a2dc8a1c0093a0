//! Transaction boundary tests for the `SQLite` unit of work.

use super::helpers::{TestDatabase, repositories, task_at, task_list_at, test_database};
use docket::task::{
    adapters::sqlite::{Database, DatabaseUrl},
    ports::{Page, RepositoryError, TaskListRepository, TaskRepository},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rollback_discards_every_write(test_database: TestDatabase) {
    let inbox = task_list_at("Inbox", 0);
    let task = task_at(inbox.id(), "t1", 1);
    let unit_of_work = test_database.begin().await;
    let (task_lists, tasks) = repositories(&unit_of_work);
    task_lists.create(&inbox).await.expect("create list");
    tasks.create(&task).await.expect("create task");

    unit_of_work.rollback().await.expect("rollback");

    let reader = test_database.begin().await;
    let (task_lists, tasks) = repositories(&reader);
    assert!(task_lists.get(inbox.id()).await.expect("get").is_none());
    assert!(tasks.get(task.id()).await.expect("get").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_an_open_unit_of_work_rolls_back(test_database: TestDatabase) {
    let inbox = task_list_at("Inbox", 0);
    {
        let unit_of_work = test_database.begin().await;
        repositories(&unit_of_work)
            .0
            .create(&inbox)
            .await
            .expect("create list");
    }

    let reader = test_database.begin().await;
    let fetched = repositories(&reader).0.get(inbox.id()).await.expect("get");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finished_unit_of_work_rejects_further_use(test_database: TestDatabase) {
    let unit_of_work = test_database.begin().await;
    let (task_lists, _) = repositories(&unit_of_work);
    assert!(unit_of_work.is_open());

    unit_of_work.commit().await.expect("commit");

    let result = task_lists.list(Page::default()).await;
    assert!(matches!(result, Err(RepositoryError::UnitOfWorkClosed)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn run_commits_successful_work(test_database: TestDatabase) {
    let inbox = task_list_at("Inbox", 0);
    let to_store = inbox.clone();

    test_database
        .database
        .run(|unit_of_work| async move {
            repositories(&unit_of_work).0.create(&to_store).await
        })
        .await
        .expect("run should commit");

    let reader = test_database.begin().await;
    let fetched = repositories(&reader).0.get(inbox.id()).await.expect("get");
    assert_eq!(fetched, Some(inbox));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn run_rolls_back_failed_work_and_returns_its_error(test_database: TestDatabase) {
    let inbox = task_list_at("Inbox", 0);
    let to_store = inbox.clone();

    let result: Result<(), RepositoryError> = test_database
        .database
        .run(|unit_of_work| async move {
            let (task_lists, tasks) = repositories(&unit_of_work);
            task_lists.create(&to_store).await?;
            // Fails on the foreign key after the list insert succeeded.
            tasks
                .create(&task_at(docket::task::domain::TaskListId::new(), "orphan", 1))
                .await?;
            Ok(())
        })
        .await;

    assert!(matches!(result, Err(RepositoryError::UnknownTaskList(_))));
    let reader = test_database.begin().await;
    let fetched = repositories(&reader).0.get(inbox.id()).await.expect("get");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn schema_initialisation_is_idempotent(test_database: TestDatabase) {
    test_database
        .database
        .initialise_schema()
        .expect("second schema run should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn in_memory_database_supports_sequential_units_of_work() {
    let database = Database::connect(&DatabaseUrl::in_memory(), 8).expect("open database");
    database.initialise_schema().expect("apply schema");
    let inbox = task_list_at("Inbox", 0);

    let writer = database.begin().await.expect("begin");
    repositories(&writer)
        .0
        .create(&inbox)
        .await
        .expect("create list");
    writer.commit().await.expect("commit");

    let reader = database.begin().await.expect("begin");
    let listed = repositories(&reader)
        .0
        .list(Page::default())
        .await
        .expect("list");
    assert_eq!(listed, vec![inbox]);
}
