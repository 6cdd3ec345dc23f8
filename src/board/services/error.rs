//! Error types and stable error codes for board services.

use crate::board::{
    domain::{AssignmentError, BoardDomainError, ListId, ProjectId, TaskId, UserId},
    ports::RepositoryError,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable, enumerable code of a domain failure.
///
/// Boundary layers map these codes onto transport responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced project does not exist.
    ProjectNotFound,
    /// Referenced list does not exist.
    ListNotFound,
    /// Referenced task does not exist.
    TaskNotFound,
    /// User to assign is not a project member.
    MemberNotInProject,
    /// User is already assigned to the task.
    MemberAlreadyAssigned,
    /// User is not assigned to the task.
    MemberNotInTask,
    /// Task and list belong to different projects.
    TaskNotInProject,
    /// Acting user is not a project member.
    UserNotInProject,
    /// Input failed validation.
    InvalidArgument,
}

impl ErrorCode {
    /// Returns the stable code tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProjectNotFound => "PROJECT_NOT_FOUND",
            Self::ListNotFound => "LIST_NOT_FOUND",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::MemberNotInProject => "MEMBER_NOT_IN_PROJECT",
            Self::MemberAlreadyAssigned => "MEMBER_ALREADY_ASSIGNED",
            Self::MemberNotInTask => "MEMBER_NOT_IN_TASK",
            Self::TaskNotInProject => "TASK_NOT_IN_PROJECT",
            Self::UserNotInProject => "USER_NOT_IN_PROJECT",
            Self::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service-level errors for task mutations and queries.
#[derive(Debug, Error)]
pub enum TaskMutationError {
    /// Input failed validation before any lookup.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] BoardDomainError),

    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The list does not exist.
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The user to assign is not a member of the task's project.
    #[error("user {user_id} is not a member of project {project_id}")]
    MemberNotInProject {
        /// User that was to be assigned.
        user_id: UserId,
        /// Project of the task.
        project_id: ProjectId,
    },

    /// The user is already assigned to the task.
    #[error("user {user_id} is already assigned to task {task_id}")]
    MemberAlreadyAssigned {
        /// Task being changed.
        task_id: TaskId,
        /// User already assigned.
        user_id: UserId,
    },

    /// The user is not assigned to the task.
    #[error("user {user_id} is not assigned to task {task_id}")]
    MemberNotInTask {
        /// Task being changed.
        task_id: TaskId,
        /// User not assigned.
        user_id: UserId,
    },

    /// The list belongs to a different project than the task.
    #[error("list {list_id} does not belong to project {project_id}")]
    TaskNotInProject {
        /// List the task was to be placed in.
        list_id: ListId,
        /// Project the task belongs to.
        project_id: ProjectId,
    },

    /// The acting user is neither owner nor member of the project.
    #[error("user {user_id} has no access to project {project_id}")]
    UserNotInProject {
        /// Acting user.
        user_id: UserId,
        /// Project being read.
        project_id: ProjectId,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl TaskMutationError {
    /// Returns the stable domain code, or `None` for internal failures.
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::InvalidArgument(_) => Some(ErrorCode::InvalidArgument),
            Self::ProjectNotFound(_) => Some(ErrorCode::ProjectNotFound),
            Self::ListNotFound(_) => Some(ErrorCode::ListNotFound),
            Self::TaskNotFound(_) => Some(ErrorCode::TaskNotFound),
            Self::MemberNotInProject { .. } => Some(ErrorCode::MemberNotInProject),
            Self::MemberAlreadyAssigned { .. } => Some(ErrorCode::MemberAlreadyAssigned),
            Self::MemberNotInTask { .. } => Some(ErrorCode::MemberNotInTask),
            Self::TaskNotInProject { .. } => Some(ErrorCode::TaskNotInProject),
            Self::UserNotInProject { .. } => Some(ErrorCode::UserNotInProject),
            Self::Repository(_) => None,
        }
    }
}

impl From<AssignmentError> for TaskMutationError {
    fn from(err: AssignmentError) -> Self {
        match err {
            AssignmentError::AlreadyAssigned { task_id, user_id } => {
                Self::MemberAlreadyAssigned { task_id, user_id }
            }
            AssignmentError::NotAssigned { task_id, user_id } => {
                Self::MemberNotInTask { task_id, user_id }
            }
        }
    }
}

/// Result type for task mutation service operations.
pub type TaskMutationResult<T> = Result<T, TaskMutationError>;
