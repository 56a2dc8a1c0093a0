//! When steps for task completion BDD scenarios.

use super::world::{TaskCompletionWorld, run_async};
use docket::task::domain::{Task, TaskId, TaskListId};
use rstest_bdd_macros::when;

#[when("the task is completed")]
fn complete_task(world: &mut TaskCompletionWorld) -> Result<(), eyre::Report> {
    let task_id = world
        .task
        .as_ref()
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let result = run_async(world.complete_task(task_id));
    if let Ok(ref completed) = result {
        world.task = Some(completed.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when("an unknown task is completed")]
fn complete_unknown_task(world: &mut TaskCompletionWorld) {
    let result = run_async(world.complete_task(TaskId::new()));
    world.last_result = Some(result);
}

#[when(r#"a task titled "{title}" is added to an unknown list"#)]
fn add_to_unknown_list(world: &mut TaskCompletionWorld, title: String) {
    let result = run_async(world.add_task(TaskListId::new(), title));
    world.last_result = Some(result);
}
