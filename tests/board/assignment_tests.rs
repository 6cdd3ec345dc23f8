//! Assignment rejection and activity accounting.

use crate::board::helpers::seeded_board;
use rstest::rstest;
use taskboard::board::{
    domain::{ActivityKind, ActivityLog},
    ports::TaskRepository,
    services::{ErrorCode, MoveTaskRequest, TaskMemberRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn outsider_assignment_mutates_nothing() {
    let board = seeded_board().await.expect("seed board");
    let task = board.create(&board.first, "Plan").await.expect("create");
    let entries_before = board.activity_count().expect("entries");

    let result = board
        .service
        .assign_member(
            TaskMemberRequest::new(task.id(), board.outsider.id),
            board.owner.id,
        )
        .await;

    assert_eq!(
        result.err().and_then(|err| err.code()),
        Some(ErrorCode::MemberNotInProject)
    );
    let stored = board
        .tasks
        .find_by_id(task.id())
        .await
        .expect("lookup")
        .expect("task exists");
    assert_eq!(stored, task);
    assert_eq!(board.activity_count().expect("entries"), entries_before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_unassignment_mutates_nothing() {
    let board = seeded_board().await.expect("seed board");
    let task = board.create(&board.first, "Plan").await.expect("create");
    let entries_before = board.activity_count().expect("entries");

    let result = board
        .service
        .unassign_member(
            TaskMemberRequest::new(task.id(), board.member.id),
            board.member.id,
        )
        .await;

    assert_eq!(
        result.err().and_then(|err| err.code()),
        Some(ErrorCode::MemberNotInTask)
    );
    assert_eq!(board.activity_count().expect("entries"), entries_before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_mutation_records_one_entry_for_its_subject() {
    let board = seeded_board().await.expect("seed board");
    let task = board.create(&board.first, "Plan").await.expect("create");
    let request = TaskMemberRequest::new(task.id(), board.member.id);

    board
        .service
        .assign_member(request, board.owner.id)
        .await
        .expect("assign");
    board
        .service
        .move_task(
            MoveTaskRequest::new(task.id(), board.second.id(), 1),
            board.member.id,
        )
        .await
        .expect("move");
    board
        .service
        .unassign_member(request, board.member.id)
        .await
        .expect("unassign");

    let entries = board.activities.entries().expect("entries");
    let kinds: Vec<ActivityKind> = entries.iter().map(ActivityLog::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ActivityKind::AddTaskToList,
            ActivityKind::AssignMemberToTask,
            ActivityKind::MoveTask,
            ActivityKind::RemoveSelfFromTask,
        ]
    );
    assert!(entries.iter().all(|entry| entry.subject_id() == task.id()));
    assert!(
        entries
            .iter()
            .all(|entry| entry.project_id() == board.project.id())
    );
}
