//! Error types for board domain validation and parsing.

use super::{TaskId, UserId};
use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The list name is empty after trimming.
    #[error("list name must not be empty")]
    EmptyListName,

    /// The requested position is not a 1-based rank.
    #[error("invalid position {0}, expected an integer of at least 1")]
    InvalidPosition(i64),
}

/// Errors returned when changing the assignee set of a task.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AssignmentError {
    /// The user is already assigned to the task.
    #[error("user {user_id} is already assigned to task {task_id}")]
    AlreadyAssigned {
        /// Task whose assignees were being changed.
        task_id: TaskId,
        /// User that was already assigned.
        user_id: UserId,
    },

    /// The user is not assigned to the task.
    #[error("user {user_id} is not assigned to task {task_id}")]
    NotAssigned {
        /// Task whose assignees were being changed.
        task_id: TaskId,
        /// User that was not assigned.
        user_id: UserId,
    },
}

/// Error returned while parsing activity kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity kind: {0}")]
pub struct ParseActivityKindError(pub String);
