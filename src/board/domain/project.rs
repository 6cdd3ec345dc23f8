//! Project aggregate and its member set.

use super::{ProjectId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A project groups lists and owns the set of users allowed to work on them.
///
/// The owner is implicitly a member and is never stored in `member_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    owner_id: UserId,
    member_ids: Vec<UserId>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted owner identifier.
    pub owner_id: UserId,
    /// Persisted explicit members.
    pub member_ids: Vec<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project owned by `owner_id` with no other members.
    #[must_use]
    pub fn new(owner_id: UserId, clock: &impl Clock) -> Self {
        Self {
            id: ProjectId::new(),
            owner_id,
            member_ids: Vec::new(),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        let mut project = Self {
            id: data.id,
            owner_id: data.owner_id,
            member_ids: Vec::with_capacity(data.member_ids.len()),
            created_at: data.created_at,
        };
        for member_id in data.member_ids {
            project.add_member(member_id);
        }
        project
    }

    /// Adds a member, returning `self` for chained construction.
    #[must_use]
    pub fn with_member(mut self, user_id: UserId) -> Self {
        self.add_member(user_id);
        self
    }

    /// Adds a member. Adding the owner or an existing member is a no-op.
    pub fn add_member(&mut self, user_id: UserId) {
        if user_id != self.owner_id && !self.member_ids.contains(&user_id) {
            self.member_ids.push(user_id);
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the explicit members, excluding the owner.
    #[must_use]
    pub fn member_ids(&self) -> &[UserId] {
        &self.member_ids
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
