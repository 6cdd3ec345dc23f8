//! Membership predicates shared by services.
//!
//! Both checks are pure and scan small in-memory sets. Callers translate a
//! `false` answer into their own domain error.

use super::{Project, Task, UserId};

/// Returns `true` when `user_id` owns the project or is one of its members.
#[must_use]
pub fn is_project_member(project: &Project, user_id: UserId) -> bool {
    project.owner_id() == user_id || project.member_ids().contains(&user_id)
}

/// Returns `true` when `user_id` is assigned to the task.
#[must_use]
pub fn is_task_assignee(task: &Task, user_id: UserId) -> bool {
    task.assignee_ids().contains(&user_id)
}
