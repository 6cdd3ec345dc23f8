//! `PostgreSQL` project repository.

use super::{
    BoardPgPool,
    conversion::{project_to_row, row_to_project},
    models::ProjectRow,
    run_blocking,
    schema::projects,
};
use crate::board::{
    domain::{Project, ProjectId},
    ports::{EntityKind, ProjectRepository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: BoardPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn store(&self, project: &Project) -> RepositoryResult<()> {
        let row = project_to_row(project);
        let project_id = project.id();
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(projects::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::duplicate(EntityKind::Project, project_id)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, project: &Project) -> RepositoryResult<()> {
        let row = project_to_row(project);
        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(projects::table.find(row.id))
                .set(projects::member_ids.eq(&row.member_ids))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            if updated == 0 {
                return Err(RepositoryError::not_found(EntityKind::Project, row.id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        run_blocking(&self.pool, move |connection| {
            let row = projects::table
                .find(id.into_inner())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            Ok(row.map(row_to_project))
        })
        .await
    }
}
