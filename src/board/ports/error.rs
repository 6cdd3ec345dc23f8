//! Error type shared by all board repository ports.

use crate::board::domain::{ListId, ListName, Position, ProjectId};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Result type for board repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Kind of persisted entity named in repository errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A project record.
    Project,
    /// A list record.
    List,
    /// A task record.
    Task,
    /// An activity log entry.
    Activity,
    /// A user profile.
    User,
}

impl EntityKind {
    /// Returns the lowercase entity label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::List => "list",
            Self::Task => "task",
            Self::Activity => "activity",
            Self::User => "user",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate {entity} identifier: {id}")]
    Duplicate {
        /// Kind of the conflicting record.
        entity: EntityKind,
        /// Conflicting identifier.
        id: Uuid,
    },

    /// A list with the same name already exists in the project.
    #[error("list name '{name}' already exists in project {project_id}")]
    DuplicateListName {
        /// Project holding the existing list.
        project_id: ProjectId,
        /// Conflicting name.
        name: ListName,
    },

    /// Another task already occupies the position in the list.
    #[error("position {position} in list {list_id} is already taken")]
    PositionTaken {
        /// List holding the occupied slot.
        list_id: ListId,
        /// Occupied position.
        position: Position,
    },

    /// The record was not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of the missing record.
        entity: EntityKind,
        /// Missing identifier.
        id: Uuid,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Builds a duplicate-identifier error.
    pub fn duplicate(entity: EntityKind, id: impl Into<Uuid>) -> Self {
        Self::Duplicate {
            entity,
            id: id.into(),
        }
    }

    /// Builds a not-found error.
    pub fn not_found(entity: EntityKind, id: impl Into<Uuid>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
