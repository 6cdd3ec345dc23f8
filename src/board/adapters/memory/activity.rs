//! In-memory append-only activity log.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use super::lock_poisoned;
use crate::board::{
    domain::{ActivityId, ActivityLog, ProjectId, TaskId},
    ports::{ActivityRepository, EntityKind, RepositoryError, RepositoryResult},
};

/// Thread-safe in-memory activity log. Entries keep their append order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    state: Arc<RwLock<InMemoryActivityState>>,
}

#[derive(Debug, Default)]
struct InMemoryActivityState {
    entries: Vec<ActivityLog>,
    ids: HashSet<ActivityId>,
}

impl InMemoryActivityRepository {
    /// Creates an empty in-memory log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every entry in append order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the lock is poisoned.
    pub fn entries(&self) -> Result<Vec<ActivityLog>, RepositoryError> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.entries.clone())
    }

    fn select(
        &self,
        predicate: impl Fn(&ActivityLog) -> bool,
    ) -> RepositoryResult<Vec<ActivityLog>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .entries
            .iter()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn append(&self, entry: &ActivityLog) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.ids.insert(entry.id()) {
            return Err(RepositoryError::duplicate(EntityKind::Activity, entry.id()));
        }
        state.entries.push(entry.clone());
        Ok(())
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<ActivityLog>> {
        self.select(|entry| entry.project_id() == project_id)
    }

    async fn find_by_subject(&self, subject_id: TaskId) -> RepositoryResult<Vec<ActivityLog>> {
        self.select(|entry| entry.subject_id() == subject_id)
    }
}
