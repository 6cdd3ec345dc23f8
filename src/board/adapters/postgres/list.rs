//! `PostgreSQL` list repository.

use super::{
    BoardPgPool,
    conversion::{list_to_row, row_to_list},
    is_constraint_violation,
    models::ListRow,
    run_blocking,
    schema::task_lists,
};
use crate::board::{
    domain::{ListId, ProjectId, TaskList},
    ports::{EntityKind, ListRepository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Unique index enforcing per-project list names.
const LIST_NAME_CONSTRAINT: &str = "idx_task_lists_project_name_unique";

/// `PostgreSQL`-backed list repository.
#[derive(Debug, Clone)]
pub struct PostgresListRepository {
    pool: BoardPgPool,
}

impl PostgresListRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepository for PostgresListRepository {
    async fn store(&self, list: &TaskList) -> RepositoryResult<()> {
        let row = list_to_row(list);
        let list_id = list.id();
        let project_id = list.project_id();
        let name = list.name().clone();
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(task_lists::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_constraint_violation(info.as_ref(), LIST_NAME_CONSTRAINT) =>
                    {
                        RepositoryError::DuplicateListName {
                            project_id,
                            name: name.clone(),
                        }
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::duplicate(EntityKind::List, list_id)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ListId) -> RepositoryResult<Option<TaskList>> {
        run_blocking(&self.pool, move |connection| {
            let row = task_lists::table
                .find(id.into_inner())
                .select(ListRow::as_select())
                .first::<ListRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_list).transpose()
        })
        .await
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<TaskList>> {
        run_blocking(&self.pool, move |connection| {
            let rows = task_lists::table
                .filter(task_lists::project_id.eq(project_id.into_inner()))
                .order(task_lists::created_at.asc())
                .select(ListRow::as_select())
                .load::<ListRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_list).collect()
        })
        .await
    }
}
