//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::lock_poisoned;
use crate::board::{
    domain::{ListId, Task, TaskId},
    ports::{EntityKind, RepositoryError, RepositoryResult, TaskRepository},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> RepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_poisoned)?;
        if tasks.contains_key(&task.id()) {
            return Err(RepositoryError::duplicate(EntityKind::Task, task.id()));
        }
        if tasks
            .values()
            .any(|other| other.list_id() == task.list_id() && other.position() == task.position())
        {
            return Err(RepositoryError::PositionTaken {
                list_id: task.list_id(),
                position: task.position(),
            });
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_poisoned)?;
        let slot = tasks
            .get_mut(&task.id())
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Task, task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn save_positions(&self, placed: &[Task]) -> RepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_poisoned)?;

        // Validate the whole batch before touching any record.
        if let Some(missing) = placed.iter().find(|task| !tasks.contains_key(&task.id())) {
            return Err(RepositoryError::not_found(EntityKind::Task, missing.id()));
        }

        for task in placed {
            tasks.insert(task.id(), task.clone());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(lock_poisoned)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn find_by_list(&self, list_id: ListId) -> RepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_poisoned)?;
        let mut in_list: Vec<Task> = tasks
            .values()
            .filter(|task| task.list_id() == list_id)
            .cloned()
            .collect();
        in_list.sort_by_key(Task::position);
        Ok(in_list)
    }

    async fn count_in_list(&self, list_id: ListId) -> RepositoryResult<usize> {
        let tasks = self.tasks.read().map_err(lock_poisoned)?;
        Ok(tasks.values().filter(|task| task.list_id() == list_id).count())
    }
}
