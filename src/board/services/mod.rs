//! Application services for the task board.
//!
//! [`TaskMutationService`] is the entry point. It composes the position
//! engine, the activity recorder, and the per-list lock registry.

mod activity;
mod error;
mod locks;
mod ordering;
mod task_mutation;

pub use activity::ActivityRecorder;
pub use error::{ErrorCode, TaskMutationError, TaskMutationResult};
pub use locks::{ListLockGuard, ListLocks};
pub use ordering::{PlacementPlan, PositionEngine, plan_reorder, plan_transfer};
pub use task_mutation::{
    CreateTaskRequest, MoveTaskRequest, TaskMemberRequest, TaskMutationService,
};
