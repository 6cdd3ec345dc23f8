//! In-memory user profile repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::lock_poisoned;
use crate::board::{
    domain::{User, UserId},
    ports::{EntityKind, RepositoryError, RepositoryResult, UserRepository},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User) -> RepositoryResult<()> {
        let mut users = self.users.write().map_err(lock_poisoned)?;
        if users.contains_key(&user.id) {
            return Err(RepositoryError::duplicate(EntityKind::User, user.id));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        let users = self.users.read().map_err(lock_poisoned)?;
        Ok(users.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[UserId]) -> RepositoryResult<Vec<User>> {
        let users = self.users.read().map_err(lock_poisoned)?;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }
}
