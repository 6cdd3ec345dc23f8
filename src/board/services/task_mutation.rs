//! Task mutation service: create, assign, unassign, move, and read tasks.
//!
//! Every operation validates its input first, then loads and checks the
//! referenced entities, then mutates, and finally records one activity entry.
//! Activity recording is best-effort and never undoes a mutation.

use super::{
    ActivityRecorder, ListLockGuard, ListLocks, PositionEngine,
    error::{TaskMutationError, TaskMutationResult},
};
use crate::board::{
    domain::{
        ActivityDraft, ActivityKind, ActivityLog, ListId, Position, Project, ProjectId, Task,
        TaskId, TaskList, TaskTitle, User, UserId, is_project_member, is_task_assignee,
    },
    ports::{
        ActivityRepository, ListRepository, ProjectRepository, TaskRepository, UserRepository,
    },
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Request payload for creating a task at the end of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    list_id: ListId,
    project_id: ProjectId,
    title: String,
}

impl CreateTaskRequest {
    /// Creates a request for a new task titled `title` in `list_id`.
    #[must_use]
    pub fn new(list_id: ListId, project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            list_id,
            project_id,
            title: title.into(),
        }
    }
}

/// Request payload naming a task and a user, for assignment changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskMemberRequest {
    task_id: TaskId,
    user_id: UserId,
}

impl TaskMemberRequest {
    /// Creates a request about `user_id` on `task_id`.
    #[must_use]
    pub const fn new(task_id: TaskId, user_id: UserId) -> Self {
        Self { task_id, user_id }
    }
}

/// Request payload for moving a task to a list and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTaskRequest {
    task_id: TaskId,
    destination_list_id: ListId,
    position: i64,
}

impl MoveTaskRequest {
    /// Creates a request to move `task_id` to `position` in
    /// `destination_list_id`. The position is validated by the service.
    #[must_use]
    pub const fn new(task_id: TaskId, destination_list_id: ListId, position: i64) -> Self {
        Self {
            task_id,
            destination_list_id,
            position,
        }
    }
}

/// Orchestrates task mutations over injected repositories.
#[derive(Clone)]
pub struct TaskMutationService<P, L, T, A, U, C>
where
    P: ProjectRepository,
    L: ListRepository,
    T: TaskRepository,
    A: ActivityRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    lists: Arc<L>,
    tasks: Arc<T>,
    activities: Arc<A>,
    users: Arc<U>,
    clock: Arc<C>,
    engine: PositionEngine<T, C>,
    recorder: ActivityRecorder<A, C>,
    locks: ListLocks,
}

impl<P, L, T, A, U, C> TaskMutationService<P, L, T, A, U, C>
where
    P: ProjectRepository,
    L: ListRepository,
    T: TaskRepository,
    A: ActivityRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new service over the given repositories.
    #[must_use]
    pub fn new(
        projects: Arc<P>,
        lists: Arc<L>,
        tasks: Arc<T>,
        activities: Arc<A>,
        users: Arc<U>,
        clock: Arc<C>,
    ) -> Self {
        let engine = PositionEngine::new(Arc::clone(&tasks), Arc::clone(&clock));
        let recorder = ActivityRecorder::new(Arc::clone(&activities), Arc::clone(&clock));
        Self {
            projects,
            lists,
            tasks,
            activities,
            users,
            clock,
            engine,
            recorder,
            locks: ListLocks::new(),
        }
    }

    /// Creates a task at the end of a list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::InvalidArgument`] for an empty title,
    /// [`TaskMutationError::ProjectNotFound`] or
    /// [`TaskMutationError::ListNotFound`] for missing references,
    /// [`TaskMutationError::TaskNotInProject`] when the list belongs to a
    /// different project, or [`TaskMutationError::Repository`] on store
    /// failure.
    #[instrument(skip_all, fields(list_id = %request.list_id, actor_id = %actor_id))]
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
        actor_id: UserId,
    ) -> TaskMutationResult<Task> {
        let CreateTaskRequest {
            list_id,
            project_id,
            title,
        } = request;
        let task_title = TaskTitle::new(title)?;

        let project = self.require_project(project_id).await?;
        let list = self.require_list(list_id).await?;
        ensure_list_in_project(&list, project.id())?;

        let guard = self.locks.acquire(&[list.id()]).await;
        let position = self.engine.append_position(list.id()).await?;
        let task = Task::new(list.id(), project.id(), task_title, position, &*self.clock);
        self.tasks.store(&task).await?;
        drop(guard);

        debug!(task_id = %task.id(), position = %task.position(), "task created");
        self.recorder
            .record_best_effort(
                ActivityDraft::new(
                    ActivityKind::AddTaskToList,
                    project.id(),
                    task.id(),
                    actor_id,
                )
                .with_source_list(list.id()),
            )
            .await;
        Ok(task)
    }

    /// Assigns a project member to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::TaskNotFound`],
    /// [`TaskMutationError::ProjectNotFound`],
    /// [`TaskMutationError::MemberNotInProject`] when the user is not a
    /// project member, [`TaskMutationError::MemberAlreadyAssigned`] when the
    /// user is already assigned, or [`TaskMutationError::Repository`] on store
    /// failure.
    #[instrument(skip_all, fields(task_id = %request.task_id, user_id = %request.user_id, actor_id = %actor_id))]
    pub async fn assign_member(
        &self,
        request: TaskMemberRequest,
        actor_id: UserId,
    ) -> TaskMutationResult<Task> {
        let TaskMemberRequest { task_id, user_id } = request;
        let (mut task, guard) = self.lock_task(task_id, None).await?;

        let project = self.require_project(task.project_id()).await?;
        if !is_project_member(&project, user_id) {
            return Err(TaskMutationError::MemberNotInProject {
                user_id,
                project_id: project.id(),
            });
        }
        if is_task_assignee(&task, user_id) {
            return Err(TaskMutationError::MemberAlreadyAssigned { task_id, user_id });
        }

        task.assign(user_id, &*self.clock)?;
        self.tasks.update(&task).await?;
        drop(guard);

        let draft = if actor_id == user_id {
            ActivityDraft::new(ActivityKind::AssignSelfToTask, project.id(), task_id, actor_id)
        } else {
            ActivityDraft::new(
                ActivityKind::AssignMemberToTask,
                project.id(),
                task_id,
                actor_id,
            )
            .with_target_user(user_id)
        };
        self.recorder.record_best_effort(draft).await;
        Ok(task)
    }

    /// Removes an assignee from a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::TaskNotFound`],
    /// [`TaskMutationError::MemberNotInTask`] when the user is not assigned,
    /// or [`TaskMutationError::Repository`] on store failure.
    #[instrument(skip_all, fields(task_id = %request.task_id, user_id = %request.user_id, actor_id = %actor_id))]
    pub async fn unassign_member(
        &self,
        request: TaskMemberRequest,
        actor_id: UserId,
    ) -> TaskMutationResult<Task> {
        let TaskMemberRequest { task_id, user_id } = request;
        let (mut task, guard) = self.lock_task(task_id, None).await?;

        if !is_task_assignee(&task, user_id) {
            return Err(TaskMutationError::MemberNotInTask { task_id, user_id });
        }

        task.unassign(user_id, &*self.clock)?;
        self.tasks.update(&task).await?;
        drop(guard);

        let draft = if actor_id == user_id {
            ActivityDraft::new(
                ActivityKind::RemoveSelfFromTask,
                task.project_id(),
                task_id,
                actor_id,
            )
        } else {
            ActivityDraft::new(
                ActivityKind::RemoveMemberFromTask,
                task.project_id(),
                task_id,
                actor_id,
            )
            .with_target_user(user_id)
        };
        self.recorder.record_best_effort(draft).await;
        Ok(task)
    }

    /// Moves a task to a position in a list, within or across lists.
    ///
    /// A position past the end of the destination is clamped to an append.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::InvalidArgument`] for a position below 1
    /// (before any lookup), [`TaskMutationError::TaskNotFound`],
    /// [`TaskMutationError::ListNotFound`],
    /// [`TaskMutationError::TaskNotInProject`] when the destination belongs to
    /// another project, or [`TaskMutationError::Repository`] on store failure.
    #[instrument(skip_all, fields(task_id = %request.task_id, list_id = %request.destination_list_id, position = request.position, actor_id = %actor_id))]
    pub async fn move_task(
        &self,
        request: MoveTaskRequest,
        actor_id: UserId,
    ) -> TaskMutationResult<Task> {
        let MoveTaskRequest {
            task_id,
            destination_list_id,
            position,
        } = request;
        let target = Position::saturating(position)?;

        let task = self.require_task(task_id).await?;
        let destination = self.require_list(destination_list_id).await?;
        ensure_list_in_project(&destination, task.project_id())?;

        let (current, guard) = self.lock_task(task_id, Some(destination.id())).await?;
        let source_list_id = current.list_id();
        let placed = self
            .engine
            .transfer(&current, destination.id(), target)
            .await?;
        drop(guard);

        let kind = if source_list_id == destination.id() {
            ActivityKind::ReorderTask
        } else {
            ActivityKind::MoveTask
        };
        self.recorder
            .record_best_effort(
                ActivityDraft::new(kind, placed.project_id(), task_id, actor_id)
                    .with_source_list(source_list_id)
                    .with_destination_list(destination.id()),
            )
            .await;
        Ok(placed)
    }

    /// Returns the tasks of a list ordered by position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::ListNotFound`],
    /// [`TaskMutationError::ProjectNotFound`],
    /// [`TaskMutationError::UserNotInProject`] when the actor is neither owner
    /// nor member, or [`TaskMutationError::Repository`] on store failure.
    #[instrument(skip_all, fields(list_id = %list_id, actor_id = %actor_id))]
    pub async fn list_tasks_by_list(
        &self,
        list_id: ListId,
        actor_id: UserId,
    ) -> TaskMutationResult<Vec<Task>> {
        let list = self.require_list(list_id).await?;
        let project = self.require_project(list.project_id()).await?;
        ensure_actor_access(&project, actor_id)?;
        Ok(self.tasks.find_by_list(list.id()).await?)
    }

    /// Returns the profiles of a task's assignees in assignment order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::TaskNotFound`],
    /// [`TaskMutationError::ProjectNotFound`],
    /// [`TaskMutationError::UserNotInProject`], or
    /// [`TaskMutationError::Repository`] on store failure.
    #[instrument(skip_all, fields(task_id = %task_id, actor_id = %actor_id))]
    pub async fn list_task_assignees(
        &self,
        task_id: TaskId,
        actor_id: UserId,
    ) -> TaskMutationResult<Vec<User>> {
        let task = self.require_task(task_id).await?;
        let project = self.require_project(task.project_id()).await?;
        ensure_actor_access(&project, actor_id)?;
        Ok(self.users.find_many(task.assignee_ids()).await?)
    }

    /// Returns a project's activity entries, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::ProjectNotFound`],
    /// [`TaskMutationError::UserNotInProject`], or
    /// [`TaskMutationError::Repository`] on store failure.
    #[instrument(skip_all, fields(project_id = %project_id, actor_id = %actor_id))]
    pub async fn project_timeline(
        &self,
        project_id: ProjectId,
        actor_id: UserId,
    ) -> TaskMutationResult<Vec<ActivityLog>> {
        let project = self.require_project(project_id).await?;
        ensure_actor_access(&project, actor_id)?;
        Ok(self.activities.find_by_project(project.id()).await?)
    }

    /// Loads a task and locks its list, plus `also` when given.
    ///
    /// The task is re-read under the lock; if it changed lists in between,
    /// the locks are released and taken again for the new list.
    async fn lock_task(
        &self,
        task_id: TaskId,
        also: Option<ListId>,
    ) -> TaskMutationResult<(Task, ListLockGuard)> {
        let mut expected_list = self.require_task(task_id).await?.list_id();
        loop {
            let mut keys = vec![expected_list];
            keys.extend(also);
            let guard = self.locks.acquire(&keys).await;

            let current = self.require_task(task_id).await?;
            if guard.covers(current.list_id()) {
                return Ok((current, guard));
            }
            expected_list = current.list_id();
            drop(guard);
        }
    }

    async fn require_project(&self, project_id: ProjectId) -> TaskMutationResult<Project> {
        self.projects
            .find_by_id(project_id)
            .await?
            .ok_or(TaskMutationError::ProjectNotFound(project_id))
    }

    async fn require_list(&self, list_id: ListId) -> TaskMutationResult<TaskList> {
        self.lists
            .find_by_id(list_id)
            .await?
            .ok_or(TaskMutationError::ListNotFound(list_id))
    }

    async fn require_task(&self, task_id: TaskId) -> TaskMutationResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskMutationError::TaskNotFound(task_id))
    }
}

fn ensure_list_in_project(list: &TaskList, project_id: ProjectId) -> TaskMutationResult<()> {
    if list.project_id() == project_id {
        Ok(())
    } else {
        Err(TaskMutationError::TaskNotInProject {
            list_id: list.id(),
            project_id,
        })
    }
}

fn ensure_actor_access(project: &Project, actor_id: UserId) -> TaskMutationResult<()> {
    if is_project_member(project, actor_id) {
        Ok(())
    } else {
        Err(TaskMutationError::UserNotInProject {
            user_id: actor_id,
            project_id: project.id(),
        })
    }
}
