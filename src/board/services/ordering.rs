//! Position reordering engine.
//!
//! Keeps the positions of every list contiguous (`1..=count`) while tasks are
//! appended, reordered within a list, or transferred between lists. Planning
//! is pure: the full set of changed tasks is computed first and then written
//! through a single [`TaskRepository::save_positions`] call, so a transfer
//! either closes the source gap and fills the destination slot, or does
//! neither.
//!
//! Targets past the end of a list are clamped: to `count + 1` when a task
//! arrives from another list, and to `count` when it moves within its own.
//!
//! Callers are expected to hold the [`super::ListLocks`] of every list a
//! plan touches.

use crate::board::{
    domain::{ListId, Position, Task, TaskId},
    ports::{EntityKind, RepositoryError, RepositoryResult, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Outcome of planning a placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementPlan {
    /// The task being placed, with its final list and position.
    pub placed: Task,
    /// Every task whose list or position changed, including `placed` when it
    /// moved.
    pub changed: Vec<Task>,
}

/// Plans moving `task_id` to `target` within the list that `siblings` form.
///
/// `siblings` must contain every task of the list, including the moving one.
/// Only tasks between the old and the new position shift, each by one.
/// Returns `None` when `task_id` is not among `siblings`.
#[must_use]
pub fn plan_reorder(
    siblings: Vec<Task>,
    task_id: TaskId,
    target: Position,
    clock: &impl Clock,
) -> Option<PlacementPlan> {
    let mut ordered = siblings;
    ordered.sort_by_key(Task::position);

    let index = ordered.iter().position(|task| task.id() == task_id)?;
    let moving = ordered.remove(index);
    let list_id = moving.list_id();
    let original = moving.clone();

    let slot = slot_for(target, ordered.len());
    ordered.insert(slot, moving);

    let changed = resequence(ordered, list_id, clock);
    let placed = find_placed(&changed, task_id).unwrap_or(original);
    Some(PlacementPlan { placed, changed })
}

/// Plans transferring `task` from its current list into `destination` at
/// `target`.
///
/// Tasks after the moved one in the source list shift down by one; tasks at
/// or after the insertion slot in the destination shift up by one.
#[must_use]
pub fn plan_transfer(
    source_siblings: Vec<Task>,
    destination_siblings: Vec<Task>,
    task: Task,
    destination: ListId,
    target: Position,
    clock: &impl Clock,
) -> PlacementPlan {
    let task_id = task.id();
    let source = task.list_id();
    let original = task.clone();

    let mut remaining: Vec<Task> = source_siblings
        .into_iter()
        .filter(|sibling| sibling.id() != task_id)
        .collect();
    remaining.sort_by_key(Task::position);

    let mut receiving: Vec<Task> = destination_siblings
        .into_iter()
        .filter(|sibling| sibling.id() != task_id)
        .collect();
    receiving.sort_by_key(Task::position);

    let slot = slot_for(target, receiving.len());
    receiving.insert(slot, task);

    let mut changed = resequence(remaining, source, clock);
    changed.extend(resequence(receiving, destination, clock));
    let placed = find_placed(&changed, task_id).unwrap_or(original);
    PlacementPlan { placed, changed }
}

/// Zero-based insertion slot for a 1-based target, clamped to `len`.
fn slot_for(target: Position, len: usize) -> usize {
    let wanted = target.value().saturating_sub(1);
    usize::try_from(wanted).map_or(len, |slot| slot.min(len))
}

/// Renumbers `ordered` as `1..=len` inside `list_id`, returning the tasks
/// whose placement changed.
fn resequence(ordered: Vec<Task>, list_id: ListId, clock: &impl Clock) -> Vec<Task> {
    let mut changed = Vec::new();
    let mut position = Position::FIRST;
    for mut task in ordered {
        if task.place(list_id, position, clock) {
            changed.push(task);
        }
        position = position.next();
    }
    changed
}

fn find_placed(changed: &[Task], task_id: TaskId) -> Option<Task> {
    changed.iter().find(|task| task.id() == task_id).cloned()
}

/// Applies placement plans against a task repository.
#[derive(Clone)]
pub struct PositionEngine<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<T, C> PositionEngine<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new engine over `tasks`.
    #[must_use]
    pub const fn new(tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self { tasks, clock }
    }

    /// Returns the position a new task appended to `list_id` receives.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the task count cannot be read.
    pub async fn append_position(&self, list_id: ListId) -> RepositoryResult<Position> {
        let count = self.tasks.count_in_list(list_id).await?;
        Ok(Position::after(count))
    }

    /// Moves `task` to `target` within its current list.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the list cannot be read or the new
    /// positions cannot be written.
    pub async fn reorder(&self, task: &Task, target: Position) -> RepositoryResult<Task> {
        let siblings = self.tasks.find_by_list(task.list_id()).await?;
        let plan = plan_reorder(siblings, task.id(), target, &*self.clock)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Task, task.id()))?;
        self.apply(&plan).await?;
        Ok(plan.placed)
    }

    /// Transfers `task` into `destination` at `target`, closing the gap it
    /// leaves behind in one atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when either list cannot be read or the new
    /// positions cannot be written.
    pub async fn transfer(
        &self,
        task: &Task,
        destination: ListId,
        target: Position,
    ) -> RepositoryResult<Task> {
        if task.list_id() == destination {
            return self.reorder(task, target).await;
        }
        let source_siblings = self.tasks.find_by_list(task.list_id()).await?;
        let destination_siblings = self.tasks.find_by_list(destination).await?;
        let plan = plan_transfer(
            source_siblings,
            destination_siblings,
            task.clone(),
            destination,
            target,
            &*self.clock,
        );
        self.apply(&plan).await?;
        Ok(plan.placed)
    }

    /// Single-list position primitive.
    ///
    /// With `inserting` set, opens a slot at `new_position` in `list_id` and
    /// places the task there; a task already owned by `list_id` is reordered
    /// instead so no gap appears. Without `inserting`, closes the gap the task
    /// leaves in `list_id` and leaves the task record itself untouched; the
    /// caller places it elsewhere.
    ///
    /// Returns the tasks whose placement changed.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the task does not exist, or
    /// any error raised while reading or writing positions.
    pub async fn update_position(
        &self,
        list_id: ListId,
        task_id: TaskId,
        new_position: Position,
        inserting: bool,
    ) -> RepositoryResult<Vec<Task>> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Task, task_id))?;
        let siblings = self.tasks.find_by_list(list_id).await?;

        let changed = if !inserting {
            let remaining = siblings
                .into_iter()
                .filter(|sibling| sibling.id() != task_id)
                .collect();
            resequence(remaining, list_id, &*self.clock)
        } else if task.list_id() == list_id {
            plan_reorder(siblings, task_id, new_position, &*self.clock)
                .map(|plan| plan.changed)
                .unwrap_or_default()
        } else {
            let mut receiving: Vec<Task> = siblings;
            receiving.sort_by_key(Task::position);
            let slot = slot_for(new_position, receiving.len());
            receiving.insert(slot, task);
            resequence(receiving, list_id, &*self.clock)
        };

        self.save(&changed).await?;
        Ok(changed)
    }

    async fn apply(&self, plan: &PlacementPlan) -> RepositoryResult<()> {
        debug!(
            task_id = %plan.placed.id(),
            list_id = %plan.placed.list_id(),
            position = %plan.placed.position(),
            changed = plan.changed.len(),
            "applying placement plan"
        );
        self.save(&plan.changed).await
    }

    async fn save(&self, changed: &[Task]) -> RepositoryResult<()> {
        if changed.is_empty() {
            return Ok(());
        }
        self.tasks.save_positions(changed).await
    }
}
