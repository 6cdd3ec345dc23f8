//! In-memory document store adapters for board tests and embedding.

mod activity;
mod list;
mod project;
mod task;
mod user;

pub use activity::InMemoryActivityRepository;
pub use list::InMemoryListRepository;
pub use project::InMemoryProjectRepository;
pub use task::InMemoryTaskRepository;
pub use user::InMemoryUserRepository;

use crate::board::ports::RepositoryError;
use std::sync::PoisonError;

/// Maps a poisoned lock into a persistence failure.
fn lock_poisoned<T>(err: PoisonError<T>) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}
