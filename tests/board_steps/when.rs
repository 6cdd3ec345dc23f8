//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::board::services::{CreateTaskRequest, MoveTaskRequest, TaskMemberRequest};

#[when(r#"task "{title}" is created in list "{list}""#)]
fn create_task(
    world: &mut TaskBoardWorld,
    title: String,
    list: String,
) -> Result<(), eyre::Report> {
    let list_id = world.list_id(&list)?;
    let project_id = world.project()?.id();
    let result = run_async(world.service.create_task(
        CreateTaskRequest::new(list_id, project_id, title.as_str()),
        world.owner.id,
    ));
    if let Ok(ref created) = result {
        world.task_ids.insert(title, created.id());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"task "{title}" is moved to list "{list}" at position {position:i64}"#)]
fn move_task(
    world: &mut TaskBoardWorld,
    title: String,
    list: String,
    position: i64,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let list_id = world.list_id(&list)?;
    let result = run_async(world.service.move_task(
        MoveTaskRequest::new(task_id, list_id, position),
        world.owner.id,
    ));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the owner assigns an outsider to task "{title}""#)]
fn assign_outsider(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(world.service.assign_member(
        TaskMemberRequest::new(task_id, world.outsider.id),
        world.owner.id,
    ));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the owner assigns the member to task "{title}""#)]
fn assign_member(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(world.service.assign_member(
        TaskMemberRequest::new(task_id, world.member.id),
        world.owner.id,
    ));
    world.last_result = Some(result);
    Ok(())
}
