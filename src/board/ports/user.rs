//! Repository port for user profiles.

use super::RepositoryResult;
use crate::board::domain::{User, UserId};
use async_trait::async_trait;

/// User profile lookup contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user profile.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::Duplicate`] when the user ID already
    /// exists.
    async fn store(&self, user: &User) -> RepositoryResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;

    /// Returns the profiles of `ids` in request order, skipping unknown ids.
    async fn find_many(&self, ids: &[UserId]) -> RepositoryResult<Vec<User>>;
}
