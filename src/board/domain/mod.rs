//! Domain model for the task board.
//!
//! Projects own lists, lists own ordered tasks, and every mutation leaves an
//! activity entry behind. Infrastructure concerns stay outside this module.

mod activity;
mod error;
mod ids;
mod list;
mod membership;
mod position;
mod project;
mod task;
mod user;

pub use activity::{ActivityDraft, ActivityKind, ActivityLog};
pub use error::{AssignmentError, BoardDomainError, ParseActivityKindError};
pub use ids::{ActivityId, ListId, ProjectId, TaskId, UserId};
pub use list::{ListName, TaskList};
pub use membership::{is_project_member, is_task_assignee};
pub use position::Position;
pub use project::{PersistedProjectData, Project};
pub use task::{PersistedTaskData, Task, TaskTitle};
pub use user::User;
