//! Repository port for tasks and their positions.

use super::RepositoryResult;
use crate::board::domain::{ListId, Task, TaskId};
use async_trait::async_trait;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::Duplicate`] when the task ID already
    /// exists or [`super::RepositoryError::PositionTaken`] when another task
    /// holds the same position in the list.
    async fn store(&self, task: &Task) -> RepositoryResult<()>;

    /// Persists changes to an existing task (title, assignees, placement).
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> RepositoryResult<()>;

    /// Persists list ownership and position of every given task in one
    /// atomic write. Either all placements are applied or none.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::NotFound`] when any task does not
    /// exist; no placement is applied in that case.
    async fn save_positions(&self, tasks: &[Task]) -> RepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns the tasks of a list ordered by position ascending.
    async fn find_by_list(&self, list_id: ListId) -> RepositoryResult<Vec<Task>>;

    /// Returns the number of tasks in a list.
    async fn count_in_list(&self, list_id: ListId) -> RepositoryResult<usize>;
}
