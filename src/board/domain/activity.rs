//! Append-only activity log entries describing board mutations.

use super::{ActivityId, ListId, ParseActivityKindError, ProjectId, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of mutation an activity entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    /// A task was created in a list.
    AddTaskToList,
    /// The actor assigned themself to a task.
    AssignSelfToTask,
    /// The actor assigned another member to a task.
    AssignMemberToTask,
    /// The actor removed themself from a task.
    RemoveSelfFromTask,
    /// The actor removed another member from a task.
    RemoveMemberFromTask,
    /// A task moved to a different list.
    MoveTask,
    /// A task changed rank within its own list.
    ReorderTask,
}

impl ActivityKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::AddTaskToList,
        Self::AssignSelfToTask,
        Self::AssignMemberToTask,
        Self::RemoveSelfFromTask,
        Self::RemoveMemberFromTask,
        Self::MoveTask,
        Self::ReorderTask,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddTaskToList => "ADD_TASK_TO_LIST",
            Self::AssignSelfToTask => "ASSIGN_SELF_TO_TASK",
            Self::AssignMemberToTask => "ASSIGN_MEMBER_TO_TASK",
            Self::RemoveSelfFromTask => "REMOVE_SELF_FROM_TASK",
            Self::RemoveMemberFromTask => "REMOVE_MEMBER_FROM_TASK",
            Self::MoveTask => "MOVE_TASK",
            Self::ReorderTask => "REORDER_TASK",
        }
    }
}

impl TryFrom<&str> for ActivityKind {
    type Error = ParseActivityKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseActivityKindError(value.to_owned()))
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of an activity before it receives an identity and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    /// Kind of mutation.
    pub kind: ActivityKind,
    /// Project the mutation happened in.
    pub project_id: ProjectId,
    /// Entity the mutation was applied to.
    pub subject_id: TaskId,
    /// User who performed the mutation.
    pub actor_id: UserId,
    /// List the subject came from, if relevant.
    pub source_list_id: Option<ListId>,
    /// User affected by the mutation, if different from the actor.
    pub target_user_id: Option<UserId>,
    /// List the subject went to, if relevant.
    pub destination_list_id: Option<ListId>,
}

impl ActivityDraft {
    /// Creates a draft with no optional references.
    #[must_use]
    pub const fn new(
        kind: ActivityKind,
        project_id: ProjectId,
        subject_id: TaskId,
        actor_id: UserId,
    ) -> Self {
        Self {
            kind,
            project_id,
            subject_id,
            actor_id,
            source_list_id: None,
            target_user_id: None,
            destination_list_id: None,
        }
    }

    /// Sets the source list.
    #[must_use]
    pub const fn with_source_list(mut self, list_id: ListId) -> Self {
        self.source_list_id = Some(list_id);
        self
    }

    /// Sets the affected user.
    #[must_use]
    pub const fn with_target_user(mut self, user_id: UserId) -> Self {
        self.target_user_id = Some(user_id);
        self
    }

    /// Sets the destination list.
    #[must_use]
    pub const fn with_destination_list(mut self, list_id: ListId) -> Self {
        self.destination_list_id = Some(list_id);
        self
    }
}

/// Immutable audit record of one board mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    id: ActivityId,
    kind: ActivityKind,
    project_id: ProjectId,
    subject_id: TaskId,
    actor_id: UserId,
    source_list_id: Option<ListId>,
    target_user_id: Option<UserId>,
    destination_list_id: Option<ListId>,
    created_at: DateTime<Utc>,
}

impl ActivityLog {
    /// Stamps a draft with a fresh identifier and the current time.
    #[must_use]
    pub fn from_draft(draft: ActivityDraft, clock: &impl Clock) -> Self {
        Self::from_persisted(ActivityId::new(), draft, clock.utc())
    }

    /// Reconstructs an entry from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: ActivityId,
        draft: ActivityDraft,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind: draft.kind,
            project_id: draft.project_id,
            subject_id: draft.subject_id,
            actor_id: draft.actor_id,
            source_list_id: draft.source_list_id,
            target_user_id: draft.target_user_id,
            destination_list_id: draft.destination_list_id,
            created_at,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the mutation kind.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Returns the project the mutation happened in.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the mutated entity.
    #[must_use]
    pub const fn subject_id(&self) -> TaskId {
        self.subject_id
    }

    /// Returns the user who performed the mutation.
    #[must_use]
    pub const fn actor_id(&self) -> UserId {
        self.actor_id
    }

    /// Returns the list the subject came from, if any.
    #[must_use]
    pub const fn source_list_id(&self) -> Option<ListId> {
        self.source_list_id
    }

    /// Returns the affected user, if any.
    #[must_use]
    pub const fn target_user_id(&self) -> Option<UserId> {
        self.target_user_id
    }

    /// Returns the list the subject went to, if any.
    #[must_use]
    pub const fn destination_list_id(&self) -> Option<ListId> {
        self.destination_list_id
    }

    /// Returns the recording timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
