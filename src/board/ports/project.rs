//! Repository port for projects.

use super::RepositoryResult;
use crate::board::domain::{Project, ProjectId};
use async_trait::async_trait;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::Duplicate`] when the project ID
    /// already exists.
    async fn store(&self, project: &Project) -> RepositoryResult<()>;

    /// Persists membership changes of an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::NotFound`] when the project does not
    /// exist.
    async fn update(&self, project: &Project) -> RepositoryResult<()>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;
}
