//! `PostgreSQL` adapters for task board persistence.
//!
//! Every repository shares one r2d2 pool and off-loads Diesel calls to the
//! blocking thread pool. The schema these adapters expect lives in
//! `migrations/`.

mod activity;
mod conversion;
mod list;
mod models;
mod project;
mod schema;
mod task;
mod user;

pub use activity::PostgresActivityRepository;
pub use list::PostgresListRepository;
pub use project::PostgresProjectRepository;
pub use task::PostgresTaskRepository;
pub use user::PostgresUserRepository;

use crate::board::ports::{RepositoryError, RepositoryResult};
use crate::config::DatabaseConfig;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool from database configuration.
///
/// # Errors
///
/// Returns [`RepositoryError::Persistence`] when the pool cannot open its
/// initial connections.
pub fn build_pool(config: &DatabaseConfig) -> RepositoryResult<BoardPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
    Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
        .map_err(RepositoryError::persistence)
}

/// Runs a Diesel operation on the blocking thread pool with a pooled
/// connection.
async fn run_blocking<F, T>(pool: &BoardPgPool, f: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let shared_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = shared_pool.get().map_err(RepositoryError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(RepositoryError::persistence)?
}

/// Error carried out of a Diesel transaction closure.
#[derive(Debug)]
enum TransactionError {
    /// Diesel or database failure; the transaction rolls back.
    Diesel(DieselError),
    /// Domain-level abort; the transaction rolls back.
    Aborted(RepositoryError),
}

impl From<DieselError> for TransactionError {
    fn from(err: DieselError) -> Self {
        Self::Diesel(err)
    }
}

impl From<TransactionError> for RepositoryError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::Diesel(diesel_err) => Self::persistence(diesel_err),
            TransactionError::Aborted(repository_err) => repository_err,
        }
    }
}

fn is_constraint_violation(info: &dyn DatabaseErrorInformation, constraint: &str) -> bool {
    info.constraint_name().is_some_and(|name| name == constraint)
}
