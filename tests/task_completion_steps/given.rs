//! Given steps for task completion BDD scenarios.

use super::world::{TaskCompletionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a task list named "{name}""#)]
fn task_list_named(world: &mut TaskCompletionWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.create_task_list(name)).wrap_err("create task list")?;
    world.task_list = Some(created);
    Ok(())
}

#[given(r#"a task titled "{title}" in that list"#)]
fn task_in_list(world: &mut TaskCompletionWorld, title: String) -> Result<(), eyre::Report> {
    let task_list_id = world
        .task_list
        .as_ref()
        .map(docket::task::domain::TaskList::id)
        .ok_or_else(|| eyre::eyre!("missing task list in scenario world"))?;
    let added = run_async(world.add_task(task_list_id, title)).wrap_err("add task")?;
    world.task = Some(added);
    Ok(())
}

#[given("the task has been completed")]
fn task_has_been_completed(world: &mut TaskCompletionWorld) -> Result<(), eyre::Report> {
    let task_id = world
        .task
        .as_ref()
        .map(docket::task::domain::Task::id)
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let completed = run_async(world.complete_task(task_id)).wrap_err("complete task")?;
    world.first_completed_at = completed.completed_at();
    world.task = Some(completed);
    Ok(())
}
