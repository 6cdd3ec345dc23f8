//! Position invariants across create and move sequences.

use crate::board::helpers::{assert_contiguous, seeded_board};
use rstest::rstest;
use std::collections::HashMap;
use taskboard::board::{domain::TaskId, services::MoveTaskRequest};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn gap_closes_and_repeat_move_only_reorders() {
    let board = seeded_board().await.expect("seed board");
    let t1 = board.create(&board.first, "T1").await.expect("create T1");
    let t2 = board.create(&board.first, "T2").await.expect("create T2");
    assert_eq!(t1.position().value(), 1);
    assert_eq!(t2.position().value(), 2);

    let moved = board
        .service
        .move_task(
            MoveTaskRequest::new(t1.id(), board.second.id(), 1),
            board.owner.id,
        )
        .await
        .expect("move T1");
    assert_eq!(moved.list_id(), board.second.id());
    assert_eq!(moved.position().value(), 1);

    let remaining = board.tasks_in(&board.first).await.expect("first list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        remaining.first().map(|task| task.position().value()),
        Some(1)
    );

    let again = board
        .service
        .move_task(
            MoveTaskRequest::new(t1.id(), board.second.id(), 1),
            board.owner.id,
        )
        .await
        .expect("repeat move");
    assert_eq!(again.position().value(), 1);
    assert_eq!(
        board.titles_in(&board.first).await.expect("titles"),
        vec!["T2"]
    );
    assert_eq!(
        board.titles_in(&board.second).await.expect("titles"),
        vec!["T1"]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_list_move_only_shifts_the_spanned_range() {
    let board = seeded_board().await.expect("seed board");
    let mut ids = Vec::new();
    for title in ["A", "B", "C", "D", "E", "F"] {
        ids.push(board.create(&board.first, title).await.expect("create").id());
    }
    let before: HashMap<TaskId, u32> = board
        .tasks_in(&board.first)
        .await
        .expect("tasks")
        .iter()
        .map(|task| (task.id(), task.position().value()))
        .collect();
    let moving = *ids.get(4).expect("E");

    board
        .service
        .move_task(
            MoveTaskRequest::new(moving, board.first.id(), 2),
            board.owner.id,
        )
        .await
        .expect("reorder");

    let after = board.tasks_in(&board.first).await.expect("tasks");
    assert_contiguous(&after);
    for task in after.iter().filter(|task| task.id() != moving) {
        let old = *before.get(&task.id()).expect("known task");
        let new = task.position().value();
        if (2..=4).contains(&old) {
            assert_eq!(new, old + 1, "tasks in the span shift by one");
        } else {
            assert_eq!(new, old, "tasks outside the span keep their slot");
        }
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cross_list_move_shifts_source_tail_and_destination_tail() {
    let board = seeded_board().await.expect("seed board");
    let mut source_ids = Vec::new();
    for title in ["S1", "S2", "S3", "S4"] {
        source_ids.push(board.create(&board.first, title).await.expect("create").id());
    }
    for title in ["D1", "D2", "D3"] {
        board.create(&board.second, title).await.expect("create");
    }
    let moving = *source_ids.get(1).expect("S2");

    board
        .service
        .move_task(
            MoveTaskRequest::new(moving, board.second.id(), 2),
            board.owner.id,
        )
        .await
        .expect("move");

    assert_eq!(
        board.titles_in(&board.first).await.expect("titles"),
        vec!["S1", "S3", "S4"]
    );
    assert_eq!(
        board.titles_in(&board.second).await.expect("titles"),
        vec!["D1", "S2", "D2", "D3"]
    );
    assert_contiguous(&board.tasks_in(&board.first).await.expect("tasks"));
    assert_contiguous(&board.tasks_in(&board.second).await.expect("tasks"));
}

/// Moves as `(task index, list index, target position)`.
const WALK: [(usize, usize, i64); 16] = [
    (0, 1, 1),
    (3, 1, 9),
    (5, 0, 2),
    (1, 1, 3),
    (7, 0, 1),
    (2, 1, 2),
    (0, 0, 5),
    (6, 1, 1),
    (4, 0, 4),
    (3, 0, 1),
    (5, 1, 7),
    (1, 0, 2),
    (2, 0, 3),
    (7, 1, 2),
    (6, 0, 6),
    (4, 1, 1),
];

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn long_mixed_sequence_keeps_every_list_contiguous() {
    let board = seeded_board().await.expect("seed board");
    let lists = [board.first.clone(), board.second.clone()];
    let mut ids = Vec::new();
    for (index, list) in lists.iter().cycle().take(8).enumerate() {
        ids.push(
            board
                .create(list, &format!("task-{index}"))
                .await
                .expect("create")
                .id(),
        );
    }

    for (task_index, list_index, target) in WALK.iter().chain(WALK.iter().rev()) {
        let task_id = *ids.get(*task_index).expect("task index");
        let list = lists.get(*list_index).expect("list index");

        board
            .service
            .move_task(MoveTaskRequest::new(task_id, list.id(), *target), board.member.id)
            .await
            .expect("move");

        let first = board.tasks_in(&board.first).await.expect("tasks");
        let second = board.tasks_in(&board.second).await.expect("tasks");
        assert_contiguous(&first);
        assert_contiguous(&second);
        assert_eq!(first.len() + second.len(), 8);
    }
    assert_eq!(board.activity_count().expect("entries"), 8 + 2 * WALK.len());
}
