//! Conversions between board domain types and Diesel rows.

use super::models::{ActivityRow, ListRow, ProjectRow, TaskRow, UserRow};
use crate::board::{
    domain::{
        ActivityDraft, ActivityId, ActivityKind, ActivityLog, ListId, ListName,
        PersistedProjectData, PersistedTaskData, Position, Project, ProjectId, Task, TaskId,
        TaskList, TaskTitle, User, UserId,
    },
    ports::{RepositoryError, RepositoryResult},
};
use uuid::Uuid;

pub(super) fn project_to_row(project: &Project) -> ProjectRow {
    ProjectRow {
        id: project.id().into_inner(),
        owner_id: project.owner_id().into_inner(),
        member_ids: project
            .member_ids()
            .iter()
            .copied()
            .map(UserId::into_inner)
            .collect(),
        created_at: project.created_at(),
    }
}

pub(super) fn row_to_project(row: ProjectRow) -> Project {
    Project::from_persisted(PersistedProjectData {
        id: ProjectId::from_uuid(row.id),
        owner_id: UserId::from_uuid(row.owner_id),
        member_ids: row.member_ids.into_iter().map(UserId::from_uuid).collect(),
        created_at: row.created_at,
    })
}

pub(super) fn list_to_row(list: &TaskList) -> ListRow {
    ListRow {
        id: list.id().into_inner(),
        project_id: list.project_id().into_inner(),
        name: list.name().as_str().to_owned(),
        created_at: list.created_at(),
    }
}

pub(super) fn row_to_list(row: ListRow) -> RepositoryResult<TaskList> {
    let name = ListName::new(row.name).map_err(RepositoryError::persistence)?;
    Ok(TaskList::from_persisted(
        ListId::from_uuid(row.id),
        ProjectId::from_uuid(row.project_id),
        name,
        row.created_at,
    ))
}

pub(super) fn task_to_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id().into_inner(),
        list_id: task.list_id().into_inner(),
        project_id: task.project_id().into_inner(),
        title: task.title().as_str().to_owned(),
        position: i32::from(task.position()),
        assignee_ids: task
            .assignee_ids()
            .iter()
            .copied()
            .map(UserId::into_inner)
            .collect(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

pub(super) fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    let TaskRow {
        id,
        list_id,
        project_id,
        title: persisted_title,
        position: persisted_position,
        assignee_ids,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(RepositoryError::persistence)?;
    let position = Position::try_from(persisted_position).map_err(RepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        list_id: ListId::from_uuid(list_id),
        project_id: ProjectId::from_uuid(project_id),
        title,
        position,
        assignee_ids: assignee_ids.into_iter().map(UserId::from_uuid).collect(),
        created_at,
        updated_at,
    }))
}

pub(super) fn activity_to_row(entry: &ActivityLog) -> ActivityRow {
    ActivityRow {
        id: entry.id().into_inner(),
        kind: entry.kind().as_str().to_owned(),
        project_id: entry.project_id().into_inner(),
        subject_id: entry.subject_id().into_inner(),
        actor_id: entry.actor_id().into_inner(),
        source_list_id: entry.source_list_id().map(ListId::into_inner),
        target_user_id: entry.target_user_id().map(UserId::into_inner),
        destination_list_id: entry.destination_list_id().map(ListId::into_inner),
        created_at: entry.created_at(),
    }
}

pub(super) fn row_to_activity(row: ActivityRow) -> RepositoryResult<ActivityLog> {
    let kind = ActivityKind::try_from(row.kind.as_str()).map_err(RepositoryError::persistence)?;
    let draft = ActivityDraft {
        kind,
        project_id: ProjectId::from_uuid(row.project_id),
        subject_id: TaskId::from_uuid(row.subject_id),
        actor_id: UserId::from_uuid(row.actor_id),
        source_list_id: row.source_list_id.map(ListId::from_uuid),
        target_user_id: row.target_user_id.map(UserId::from_uuid),
        destination_list_id: row.destination_list_id.map(ListId::from_uuid),
    };
    Ok(ActivityLog::from_persisted(
        ActivityId::from_uuid(row.id),
        draft,
        row.created_at,
    ))
}

pub(super) fn user_to_row(user: &User) -> UserRow {
    UserRow {
        id: user.id.into_inner(),
        username: user.username.clone(),
        email: user.email.clone(),
        full_name: user.full_name.clone(),
    }
}

pub(super) fn row_to_user(row: UserRow) -> User {
    User {
        id: UserId::from_uuid(row.id),
        username: row.username,
        email: row.email,
        full_name: row.full_name,
    }
}

/// Reorders loaded rows to follow `requested`, dropping unknown ids.
pub(super) fn order_by_request<T>(
    requested: &[Uuid],
    mut loaded: Vec<T>,
    key: impl Fn(&T) -> Uuid,
) -> Vec<T> {
    let mut ordered = Vec::with_capacity(loaded.len());
    for id in requested {
        if let Some(index) = loaded.iter().position(|item| key(item) == *id) {
            ordered.push(loaded.swap_remove(index));
        }
    }
    ordered
}
