//! Repository port for the append-only activity log.

use super::RepositoryResult;
use crate::board::domain::{ActivityLog, ProjectId, TaskId};
use async_trait::async_trait;

/// Activity log persistence contract. Entries are appended and read only.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::Duplicate`] when the entry ID already
    /// exists.
    async fn append(&self, entry: &ActivityLog) -> RepositoryResult<()>;

    /// Returns the entries of a project, oldest first.
    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<ActivityLog>>;

    /// Returns the entries whose subject is the given task, oldest first.
    async fn find_by_subject(&self, subject_id: TaskId) -> RepositoryResult<Vec<ActivityLog>>;
}
