//! `PostgreSQL` task repository.

use super::{
    BoardPgPool, TransactionError,
    conversion::{row_to_task, task_to_row},
    is_constraint_violation,
    models::TaskRow,
    run_blocking,
    schema::tasks,
};
use crate::board::{
    domain::{ListId, Position, Task, TaskId},
    ports::{EntityKind, RepositoryError, RepositoryResult, TaskRepository},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

const TASK_POSITION_CONSTRAINT: &str = "idx_tasks_list_position_unique";

/// `PostgreSQL`-backed task repository.
///
/// `(list_id, position)` is a deferred unique constraint, so a batch of
/// placements may pass through transient duplicates inside one transaction
/// but can never commit them.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: BoardPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> RepositoryResult<()> {
        let row = task_to_row(task);
        let (task_id, list_id, position) = (task.id(), task.list_id(), task.position());
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(tasks::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| store_error(err, task_id, list_id, position))?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let row = task_to_row(task);
        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(tasks::table.find(row.id))
                .set((
                    tasks::list_id.eq(row.list_id),
                    tasks::title.eq(&row.title),
                    tasks::position.eq(row.position),
                    tasks::assignee_ids.eq(&row.assignee_ids),
                    tasks::updated_at.eq(row.updated_at),
                ))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            if updated == 0 {
                return Err(RepositoryError::not_found(EntityKind::Task, row.id));
            }
            Ok(())
        })
        .await
    }

    async fn save_positions(&self, placed: &[Task]) -> RepositoryResult<()> {
        let rows: Vec<TaskRow> = placed.iter().map(task_to_row).collect();
        run_blocking(&self.pool, move |connection| {
            connection.transaction::<_, TransactionError, _>(|tx| {
                for row in &rows {
                    let updated = diesel::update(tasks::table.find(row.id))
                        .set((
                            tasks::list_id.eq(row.list_id),
                            tasks::position.eq(row.position),
                            tasks::updated_at.eq(row.updated_at),
                        ))
                        .execute(tx)?;
                    if updated == 0 {
                        return Err(TransactionError::Aborted(RepositoryError::not_found(
                            EntityKind::Task,
                            row.id,
                        )));
                    }
                }
                Ok(())
            })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_list(&self, list_id: ListId) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::list_id.eq(list_id.into_inner()))
                .order(tasks::position.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn count_in_list(&self, list_id: ListId) -> RepositoryResult<usize> {
        run_blocking(&self.pool, move |connection| {
            let count = tasks::table
                .filter(tasks::list_id.eq(list_id.into_inner()))
                .count()
                .get_result::<i64>(connection)
                .map_err(RepositoryError::persistence)?;
            usize::try_from(count).map_err(RepositoryError::persistence)
        })
        .await
    }
}

/// Maps an insert failure, telling an occupied `(list_id, position)` slot
/// apart from a reused task id.
fn store_error(
    err: DieselError,
    task_id: TaskId,
    list_id: ListId,
    position: Position,
) -> RepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_constraint_violation(info.as_ref(), TASK_POSITION_CONSTRAINT) =>
        {
            RepositoryError::PositionTaken { list_id, position }
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RepositoryError::duplicate(EntityKind::Task, task_id)
        }
        _ => RepositoryError::persistence(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::DatabaseErrorInformation;
    use rstest::rstest;

    #[derive(Debug)]
    struct Violation(Option<&'static str>);

    impl DatabaseErrorInformation for Violation {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            Some("tasks")
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.0
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn unique_violation(constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(Violation(constraint)),
        )
    }

    #[rstest]
    fn occupied_slot_is_reported_as_position_taken() {
        let list_id = ListId::new();
        let position = Position::new(2).expect("valid position");

        let mapped = store_error(
            unique_violation(Some(TASK_POSITION_CONSTRAINT)),
            TaskId::new(),
            list_id,
            position,
        );

        assert!(matches!(
            mapped,
            RepositoryError::PositionTaken {
                list_id: taken_list,
                position: taken_position,
            } if taken_list == list_id && taken_position == position
        ));
    }

    #[rstest]
    #[case(Some("tasks_pkey"))]
    #[case(None)]
    fn other_unique_violations_are_duplicate_ids(#[case] constraint: Option<&'static str>) {
        let task_id = TaskId::new();

        let mapped = store_error(
            unique_violation(constraint),
            task_id,
            ListId::new(),
            Position::FIRST,
        );

        assert!(matches!(
            mapped,
            RepositoryError::Duplicate {
                entity: EntityKind::Task,
                id,
            } if id == task_id.into_inner()
        ));
    }

    #[rstest]
    fn other_failures_are_persistence_errors() {
        let mapped = store_error(
            DieselError::NotFound,
            TaskId::new(),
            ListId::new(),
            Position::FIRST,
        );

        assert!(matches!(mapped, RepositoryError::Persistence(_)));
    }
}
