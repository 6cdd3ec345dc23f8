//! Task aggregate root.

use super::{AssignmentError, BoardDomainError, ListId, Position, ProjectId, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the trimmed value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task aggregate root.
///
/// `project_id` is denormalized from the owning list and must always match
/// that list's project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    list_id: ListId,
    project_id: ProjectId,
    title: TaskTitle,
    position: Position,
    assignee_ids: Vec<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning list.
    pub list_id: ListId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted rank within the list.
    pub position: Position,
    /// Persisted assignees.
    pub assignee_ids: Vec<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new unassigned task at `position` in `list_id`.
    #[must_use]
    pub fn new(
        list_id: ListId,
        project_id: ProjectId,
        title: TaskTitle,
        position: Position,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            list_id,
            project_id,
            title,
            position,
            assignee_ids: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            list_id: data.list_id,
            project_id: data.project_id,
            title: data.title,
            position: data.position,
            assignee_ids: data.assignee_ids,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning list.
    #[must_use]
    pub const fn list_id(&self) -> ListId {
        self.list_id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the rank within the owning list.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the assigned users in assignment order.
    #[must_use]
    pub fn assignee_ids(&self) -> &[UserId] {
        &self.assignee_ids
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Assigns a user to this task.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::AlreadyAssigned`] when the user is already an
    /// assignee; the task is left unchanged.
    pub fn assign(&mut self, user_id: UserId, clock: &impl Clock) -> Result<(), AssignmentError> {
        if self.assignee_ids.contains(&user_id) {
            return Err(AssignmentError::AlreadyAssigned {
                task_id: self.id,
                user_id,
            });
        }
        self.assignee_ids.push(user_id);
        self.touch(clock);
        Ok(())
    }

    /// Removes a user from this task.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::NotAssigned`] when the user is not an
    /// assignee; the task is left unchanged.
    pub fn unassign(&mut self, user_id: UserId, clock: &impl Clock) -> Result<(), AssignmentError> {
        let before = self.assignee_ids.len();
        self.assignee_ids.retain(|assignee| *assignee != user_id);
        if self.assignee_ids.len() == before {
            return Err(AssignmentError::NotAssigned {
                task_id: self.id,
                user_id,
            });
        }
        self.touch(clock);
        Ok(())
    }

    /// Places the task at `position` within `list_id`.
    ///
    /// Returns `true` when either the list or the position changed.
    pub fn place(&mut self, list_id: ListId, position: Position, clock: &impl Clock) -> bool {
        if self.list_id == list_id && self.position == position {
            return false;
        }
        self.list_id = list_id;
        self.position = position;
        self.touch(clock);
        true
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
