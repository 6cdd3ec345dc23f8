//! `PostgreSQL` user profile repository.

use super::{
    BoardPgPool,
    conversion::{order_by_request, row_to_user, user_to_row},
    models::UserRow,
    run_blocking,
    schema::users,
};
use crate::board::{
    domain::{User, UserId},
    ports::{EntityKind, RepositoryError, RepositoryResult, UserRepository},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: BoardPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn store(&self, user: &User) -> RepositoryResult<()> {
        let row = user_to_row(user);
        let user_id = user.id;
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(users::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::duplicate(EntityKind::User, user_id)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        run_blocking(&self.pool, move |connection| {
            let row = users::table
                .find(id.into_inner())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            Ok(row.map(row_to_user))
        })
        .await
    }

    async fn find_many(&self, ids: &[UserId]) -> RepositoryResult<Vec<User>> {
        let requested: Vec<Uuid> = ids.iter().copied().map(UserId::into_inner).collect();
        run_blocking(&self.pool, move |connection| {
            let rows = users::table
                .filter(users::id.eq_any(requested.clone()))
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(RepositoryError::persistence)?;
            let ordered = order_by_request(&requested, rows, |row| row.id);
            Ok(ordered.into_iter().map(row_to_user).collect())
        })
        .await
    }
}
