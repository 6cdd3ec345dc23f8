//! Lists partition a project's tasks into ordered columns.

use super::{BoardDomainError, ListId, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated list name, unique within its project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListName(String);

impl ListName {
    /// Creates a validated list name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyListName`] when the trimmed value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyListName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered column of tasks owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    id: ListId,
    project_id: ProjectId,
    name: ListName,
    created_at: DateTime<Utc>,
}

impl TaskList {
    /// Creates a new list inside `project_id`.
    #[must_use]
    pub fn new(project_id: ProjectId, name: ListName, clock: &impl Clock) -> Self {
        Self {
            id: ListId::new(),
            project_id,
            name,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a list from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: ListId,
        project_id: ProjectId,
        name: ListName,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            project_id,
            name,
            created_at,
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the list name.
    #[must_use]
    pub const fn name(&self) -> &ListName {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
