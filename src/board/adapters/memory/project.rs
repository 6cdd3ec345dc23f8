//! In-memory project repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::lock_poisoned;
use crate::board::{
    domain::{Project, ProjectId},
    ports::{EntityKind, ProjectRepository, RepositoryError, RepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn store(&self, project: &Project) -> RepositoryResult<()> {
        let mut projects = self.projects.write().map_err(lock_poisoned)?;
        if projects.contains_key(&project.id()) {
            return Err(RepositoryError::duplicate(EntityKind::Project, project.id()));
        }
        projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> RepositoryResult<()> {
        let mut projects = self.projects.write().map_err(lock_poisoned)?;
        let slot = projects
            .get_mut(&project.id())
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Project, project.id()))?;
        *slot = project.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        let projects = self.projects.read().map_err(lock_poisoned)?;
        Ok(projects.get(&id).cloned())
    }
}
