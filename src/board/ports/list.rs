//! Repository port for lists.

use super::RepositoryResult;
use crate::board::domain::{ListId, ProjectId, TaskList};
use async_trait::async_trait;

/// List persistence contract. Lists are created and read, never mutated.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Stores a new list.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::Duplicate`] when the list ID already
    /// exists or [`super::RepositoryError::DuplicateListName`] when the
    /// project already holds a list with the same name.
    async fn store(&self, list: &TaskList) -> RepositoryResult<()>;

    /// Finds a list by identifier.
    ///
    /// Returns `None` when the list does not exist.
    async fn find_by_id(&self, id: ListId) -> RepositoryResult<Option<TaskList>>;

    /// Returns every list of a project, oldest first.
    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<TaskList>>;
}
