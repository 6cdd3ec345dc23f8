//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{ActivityKind, Task},
    ports::TaskRepository,
};

fn stored_task(world: &TaskBoardWorld, title: &str) -> Result<Task, eyre::Report> {
    let task_id = world.task_id(title)?;
    run_async(world.tasks.find_by_id(task_id))?
        .ok_or_else(|| eyre::eyre!("task {title} is not stored"))
}

#[then(r#"task "{title}" is at position {position:u32} in list "{list}""#)]
fn task_is_at(
    world: &TaskBoardWorld,
    title: String,
    position: u32,
    list: String,
) -> Result<(), eyre::Report> {
    let task = stored_task(world, &title)?;
    let list_id = world.list_id(&list)?;

    if task.list_id() != list_id || task.position().value() != position {
        return Err(eyre::eyre!(
            "expected {title} at {position} in {list}, found position {} in list {}",
            task.position(),
            task.list_id()
        ));
    }
    Ok(())
}

#[then(r#"the latest activity is "{kind}""#)]
fn latest_activity_is(world: &TaskBoardWorld, kind: String) -> Result<(), eyre::Report> {
    let expected = ActivityKind::try_from(kind.as_str())?;
    let entries = world.activities.entries()?;
    let latest = entries
        .last()
        .ok_or_else(|| eyre::eyre!("no activity recorded"))?;

    if latest.kind() != expected {
        return Err(eyre::eyre!(
            "expected latest activity {expected}, found {}",
            latest.kind()
        ));
    }
    Ok(())
}

#[then(r#"the operation fails with "{code}""#)]
fn operation_fails_with(world: &TaskBoardWorld, code: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    match result {
        Err(err) if err.code().is_some_and(|actual| actual.as_str() == code) => Ok(()),
        other => Err(eyre::eyre!("expected failure {code}, got {other:?}")),
    }
}

#[then(r#"task "{title}" has no assignees"#)]
fn task_has_no_assignees(world: &TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let task = stored_task(world, &title)?;
    if !task.assignee_ids().is_empty() {
        return Err(eyre::eyre!(
            "expected no assignees, found {:?}",
            task.assignee_ids()
        ));
    }
    Ok(())
}

#[then(r#"task "{title}" has {count:usize} assignee"#)]
fn task_has_assignees(
    world: &TaskBoardWorld,
    title: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let task = stored_task(world, &title)?;
    if task.assignee_ids().len() != count {
        return Err(eyre::eyre!(
            "expected {count} assignees, found {}",
            task.assignee_ids().len()
        ));
    }
    Ok(())
}

#[then("{count:usize} activity entry has been recorded")]
fn activity_entries_recorded(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let recorded = world.activities.entries()?.len();
    if recorded != count {
        return Err(eyre::eyre!(
            "expected {count} activity entries, found {recorded}"
        ));
    }
    Ok(())
}
