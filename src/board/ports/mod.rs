//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic document store interfaces used by
//! board services.

pub mod activity;
pub mod error;
pub mod list;
pub mod project;
pub mod task;
pub mod user;

pub use activity::ActivityRepository;
pub use error::{EntityKind, RepositoryError, RepositoryResult};
pub use list::ListRepository;
pub use project::ProjectRepository;
pub use task::TaskRepository;
pub use user::UserRepository;
