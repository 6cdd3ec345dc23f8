//! `PostgreSQL` activity log repository. Insert and select only.

use super::{
    BoardPgPool,
    conversion::{activity_to_row, row_to_activity},
    models::ActivityRow,
    run_blocking,
    schema::activity_logs,
};
use crate::board::{
    domain::{ActivityLog, ProjectId, TaskId},
    ports::{ActivityRepository, EntityKind, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed activity log.
#[derive(Debug, Clone)]
pub struct PostgresActivityRepository {
    pool: BoardPgPool,
}

impl PostgresActivityRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn append(&self, entry: &ActivityLog) -> RepositoryResult<()> {
        let row = activity_to_row(entry);
        let entry_id = entry.id();
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(activity_logs::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::duplicate(EntityKind::Activity, entry_id)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<ActivityLog>> {
        run_blocking(&self.pool, move |connection| {
            let rows = activity_logs::table
                .filter(activity_logs::project_id.eq(project_id.into_inner()))
                .order((activity_logs::created_at.asc(), activity_logs::id.asc()))
                .select(ActivityRow::as_select())
                .load::<ActivityRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_activity).collect()
        })
        .await
    }

    async fn find_by_subject(&self, subject_id: TaskId) -> RepositoryResult<Vec<ActivityLog>> {
        run_blocking(&self.pool, move |connection| {
            let rows = activity_logs::table
                .filter(activity_logs::subject_id.eq(subject_id.into_inner()))
                .order((activity_logs::created_at.asc(), activity_logs::id.asc()))
                .select(ActivityRow::as_select())
                .load::<ActivityRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_activity).collect()
        })
        .await
    }
}
