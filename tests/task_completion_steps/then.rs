//! Then steps for task completion BDD scenarios.

use super::world::{TaskCompletionWorld, run_async};
use docket::task::domain::{ErrorKind, TaskList};
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then("the task reports a completion time")]
fn task_reports_completion_time(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    eyre::ensure!(task.is_completed(), "task should be completed");
    eyre::ensure!(
        task.completed_at().is_some(),
        "completed task should carry a completion time"
    );
    Ok(())
}

#[then("the list contains {count:usize} task")]
fn list_contains(world: &TaskCompletionWorld, count: usize) -> Result<(), eyre::Report> {
    let task_list_id = world
        .task_list
        .as_ref()
        .map(TaskList::id)
        .ok_or_else(|| eyre::eyre!("missing task list in scenario world"))?;
    let found = run_async(world.count_tasks(task_list_id)).wrap_err("list tasks")?;
    eyre::ensure!(found == count, "expected {count} tasks, found {found}");
    Ok(())
}

#[then("the completion time is unchanged")]
fn completion_time_unchanged(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let first = world
        .first_completed_at
        .ok_or_else(|| eyre::eyre!("missing first completion time"))?;
    let latest = world
        .task
        .as_ref()
        .and_then(docket::task::domain::Task::completed_at)
        .ok_or_else(|| eyre::eyre!("missing latest completion time"))?;
    eyre::ensure!(
        first == latest,
        "completion time moved from {first} to {latest}"
    );
    Ok(())
}

#[then("the request fails as not found")]
fn request_fails_as_not_found(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) if err.kind() == ErrorKind::NotFound => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected not found, got {err}")),
        Some(Ok(task)) => Err(eyre::eyre!("expected failure, got task {}", task.id())),
        None => Err(eyre::eyre!("no request was made")),
    }
}
