//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskboard::board::{
    domain::{ListName, Project, TaskList},
    ports::{ListRepository, ProjectRepository, UserRepository},
    services::CreateTaskRequest,
};

#[given(r#"a project with lists "{first}" and "{second}""#)]
fn project_with_lists(
    world: &mut TaskBoardWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for user in [&world.owner, &world.member, &world.outsider] {
        run_async(world.users.store(user)).wrap_err("store scenario user")?;
    }

    let project = Project::new(world.owner.id, &DefaultClock).with_member(world.member.id);
    run_async(world.projects.store(&project)).wrap_err("store scenario project")?;

    for name in [first, second] {
        let list = TaskList::new(project.id(), ListName::new(name.as_str())?, &DefaultClock);
        run_async(world.lists.store(&list)).wrap_err("store scenario list")?;
        world.list_ids.insert(name, list.id());
    }
    world.project = Some(project);
    Ok(())
}

#[given(r#"task "{title}" exists in list "{list}""#)]
fn task_exists(
    world: &mut TaskBoardWorld,
    title: String,
    list: String,
) -> Result<(), eyre::Report> {
    let list_id = world.list_id(&list)?;
    let project_id = world.project()?.id();
    let created = run_async(world.service.create_task(
        CreateTaskRequest::new(list_id, project_id, title.as_str()),
        world.owner.id,
    ))
    .wrap_err("create task in scenario setup")?;
    world.task_ids.insert(title, created.id());
    Ok(())
}
