//! Concurrent moves between two lists.

use crate::board::helpers::{assert_contiguous, seeded_board};
use rstest::rstest;
use std::sync::Arc;
use taskboard::board::services::MoveTaskRequest;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_cross_moves_keep_lists_contiguous() {
    let board = Arc::new(seeded_board().await.expect("seed board"));
    let mut forward = Vec::new();
    let mut backward = Vec::new();
    for index in 0..10 {
        forward.push(
            board
                .create(&board.first, &format!("f-{index}"))
                .await
                .expect("create")
                .id(),
        );
        backward.push(
            board
                .create(&board.second, &format!("b-{index}"))
                .await
                .expect("create")
                .id(),
        );
    }

    let mut handles = Vec::new();
    let targets = [1_i64, 2, 3].into_iter().cycle();
    for ((to_second, to_first), target) in forward.into_iter().zip(backward).zip(targets) {
        for (task_id, destination) in [
            (to_second, board.second.id()),
            (to_first, board.first.id()),
        ] {
            let shared = Arc::clone(&board);
            handles.push(tokio::spawn(async move {
                shared
                    .service
                    .move_task(
                        MoveTaskRequest::new(task_id, destination, target),
                        shared.owner.id,
                    )
                    .await
            }));
        }
    }
    for handle in handles {
        handle
            .await
            .expect("task should not panic")
            .expect("move should succeed");
    }

    let first = board.tasks_in(&board.first).await.expect("tasks");
    let second = board.tasks_in(&board.second).await.expect("tasks");
    assert_contiguous(&first);
    assert_contiguous(&second);
    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 10);
    assert!(first.iter().all(|task| task.title().as_str().starts_with("b-")));
}
