//! Shared fixtures for in-memory board integration tests.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use taskboard::board::{
    adapters::memory::{
        InMemoryActivityRepository, InMemoryListRepository, InMemoryProjectRepository,
        InMemoryTaskRepository, InMemoryUserRepository,
    },
    domain::{ListName, Project, Task, TaskList, User},
    ports::{ListRepository, ProjectRepository, TaskRepository, UserRepository},
    services::{CreateTaskRequest, TaskMutationService},
};

/// Service type wired to in-memory adapters.
pub type MemoryService = TaskMutationService<
    InMemoryProjectRepository,
    InMemoryListRepository,
    InMemoryTaskRepository,
    InMemoryActivityRepository,
    InMemoryUserRepository,
    DefaultClock,
>;

/// A project with an owner, one member, one outsider, and two lists.
pub struct BoardFixture {
    pub service: MemoryService,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub activities: Arc<InMemoryActivityRepository>,
    pub owner: User,
    pub member: User,
    pub outsider: User,
    pub project: Project,
    pub first: TaskList,
    pub second: TaskList,
}

/// Builds a seeded board.
pub async fn seeded_board() -> eyre::Result<BoardFixture> {
    let projects = Arc::new(InMemoryProjectRepository::new());
    let lists = Arc::new(InMemoryListRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let activities = Arc::new(InMemoryActivityRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());

    let owner = User::new("owner", "owner@example.com", "Project Owner");
    let member = User::new("member", "member@example.com", "Project Member");
    let outsider = User::new("outsider", "outsider@example.com", "");
    for user in [&owner, &member, &outsider] {
        users.store(user).await.wrap_err("store user")?;
    }

    let project = Project::new(owner.id, &DefaultClock).with_member(member.id);
    projects.store(&project).await.wrap_err("store project")?;

    let first = TaskList::new(project.id(), ListName::new("L1")?, &DefaultClock);
    let second = TaskList::new(project.id(), ListName::new("L2")?, &DefaultClock);
    lists.store(&first).await.wrap_err("store first list")?;
    lists.store(&second).await.wrap_err("store second list")?;

    let service = TaskMutationService::new(
        projects,
        lists,
        Arc::clone(&tasks),
        Arc::clone(&activities),
        users,
        Arc::new(DefaultClock),
    );

    Ok(BoardFixture {
        service,
        tasks,
        activities,
        owner,
        member,
        outsider,
        project,
        first,
        second,
    })
}

impl BoardFixture {
    /// Creates a task titled `title` at the end of `list`.
    pub async fn create(&self, list: &TaskList, title: &str) -> eyre::Result<Task> {
        self.service
            .create_task(
                CreateTaskRequest::new(list.id(), self.project.id(), title),
                self.owner.id,
            )
            .await
            .wrap_err_with(|| format!("create task {title}"))
    }

    /// Returns the tasks of `list` ordered by position.
    pub async fn tasks_in(&self, list: &TaskList) -> eyre::Result<Vec<Task>> {
        self.tasks
            .find_by_list(list.id())
            .await
            .wrap_err("list tasks")
    }

    /// Returns the titles of `list` in position order.
    pub async fn titles_in(&self, list: &TaskList) -> eyre::Result<Vec<String>> {
        Ok(self
            .tasks_in(list)
            .await?
            .iter()
            .map(|task| task.title().as_str().to_owned())
            .collect())
    }

    /// Number of activity entries recorded so far.
    pub fn activity_count(&self) -> eyre::Result<usize> {
        Ok(self.activities.entries()?.len())
    }
}

/// Fails unless the positions of `tasks` are exactly `1..=len`.
pub fn assert_contiguous(tasks: &[Task]) {
    let positions: Vec<u32> = tasks.iter().map(|task| task.position().value()).collect();
    let expected: Vec<u32> = (1..=u32::try_from(tasks.len()).expect("small list")).collect();
    assert_eq!(positions, expected, "positions must be contiguous");
}
