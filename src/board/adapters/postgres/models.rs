//! Diesel row models for task board persistence.

use super::schema::{activity_logs, projects, task_lists, tasks, users};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Row model for project records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// Explicit members.
    pub member_ids: Vec<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Row model for list records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = task_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ListRow {
    /// List identifier.
    pub id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// List name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Row model for task records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: Uuid,
    /// Owning list.
    pub list_id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Task title.
    pub title: String,
    /// 1-based rank within the list.
    pub position: i32,
    /// Assigned users.
    pub assignee_ids: Vec<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Row model for activity entries.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = activity_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActivityRow {
    /// Entry identifier.
    pub id: Uuid,
    /// Activity kind tag.
    pub kind: String,
    /// Project the mutation happened in.
    pub project_id: Uuid,
    /// Mutated entity.
    pub subject_id: Uuid,
    /// Acting user.
    pub actor_id: Uuid,
    /// Source list, if any.
    pub source_list_id: Option<Uuid>,
    /// Affected user, if any.
    pub target_user_id: Option<Uuid>,
    /// Destination list, if any.
    pub destination_list_id: Option<Uuid>,
    /// Recording timestamp.
    pub created_at: DateTime<Utc>,
}

/// Row model for user profiles.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: Uuid,
    /// Login handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Full name.
    pub full_name: String,
}
