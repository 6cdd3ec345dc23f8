//! In-memory list repository with per-project name uniqueness.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::lock_poisoned;
use crate::board::{
    domain::{ListId, ListName, ProjectId, TaskList},
    ports::{EntityKind, ListRepository, RepositoryError, RepositoryResult},
};

/// Thread-safe in-memory list repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListRepository {
    state: Arc<RwLock<InMemoryListState>>,
}

#[derive(Debug, Default)]
struct InMemoryListState {
    lists: HashMap<ListId, TaskList>,
    name_index: HashMap<(ProjectId, ListName), ListId>,
}

impl InMemoryListRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListRepository for InMemoryListRepository {
    async fn store(&self, list: &TaskList) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.lists.contains_key(&list.id()) {
            return Err(RepositoryError::duplicate(EntityKind::List, list.id()));
        }

        let name_key = (list.project_id(), list.name().clone());
        if state.name_index.contains_key(&name_key) {
            return Err(RepositoryError::DuplicateListName {
                project_id: list.project_id(),
                name: list.name().clone(),
            });
        }

        state.name_index.insert(name_key, list.id());
        state.lists.insert(list.id(), list.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ListId) -> RepositoryResult<Option<TaskList>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.lists.get(&id).cloned())
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<TaskList>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut lists: Vec<TaskList> = state
            .lists
            .values()
            .filter(|list| list.project_id() == project_id)
            .cloned()
            .collect();
        lists.sort_by_key(TaskList::created_at);
        Ok(lists)
    }
}
