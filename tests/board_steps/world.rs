//! Shared world state for task board BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::{
        InMemoryActivityRepository, InMemoryListRepository, InMemoryProjectRepository,
        InMemoryTaskRepository, InMemoryUserRepository,
    },
    domain::{ListId, Project, Task, TaskId, User},
    services::{TaskMutationError, TaskMutationService},
};

/// Service type used by the BDD world.
pub type TestBoardService = TaskMutationService<
    InMemoryProjectRepository,
    InMemoryListRepository,
    InMemoryTaskRepository,
    InMemoryActivityRepository,
    InMemoryUserRepository,
    DefaultClock,
>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub service: TestBoardService,
    pub projects: Arc<InMemoryProjectRepository>,
    pub lists: Arc<InMemoryListRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub activities: Arc<InMemoryActivityRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub owner: User,
    pub member: User,
    pub outsider: User,
    pub project: Option<Project>,
    pub list_ids: HashMap<String, ListId>,
    pub task_ids: HashMap<String, TaskId>,
    pub last_result: Option<Result<Task, TaskMutationError>>,
}

impl TaskBoardWorld {
    /// Creates a world with repositories but no project yet.
    #[must_use]
    pub fn new() -> Self {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let lists = Arc::new(InMemoryListRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let activities = Arc::new(InMemoryActivityRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let service = TaskMutationService::new(
            Arc::clone(&projects),
            Arc::clone(&lists),
            Arc::clone(&tasks),
            Arc::clone(&activities),
            Arc::clone(&users),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            projects,
            lists,
            tasks,
            activities,
            users,
            owner: User::new("owner", "owner@example.com", "Owner"),
            member: User::new("member", "member@example.com", "Member"),
            outsider: User::new("outsider", "outsider@example.com", "Outsider"),
            project: None,
            list_ids: HashMap::new(),
            task_ids: HashMap::new(),
            last_result: None,
        }
    }

    /// Looks up a list created by a step.
    pub fn list_id(&self, name: &str) -> eyre::Result<ListId> {
        self.list_ids
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown list {name} in scenario world"))
    }

    /// Looks up a task created by a step.
    pub fn task_id(&self, title: &str) -> eyre::Result<TaskId> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task {title} in scenario world"))
    }

    /// Returns the scenario project.
    pub fn project(&self) -> eyre::Result<&Project> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
