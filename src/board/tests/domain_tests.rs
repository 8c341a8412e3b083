//! Unit tests for board domain values.

use super::fixtures::{status_type, task, task_id};
use crate::board::domain::{
    BoardColumn, BoardDomainError, BoardId, StatusType, Task, TaskId, TaskStatus,
};
use chrono::NaiveDate;
use rstest::rstest;
use uuid::Uuid;

#[rstest]
#[case("")]
#[case("   ")]
fn status_type_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(StatusType::new(raw), Err(BoardDomainError::EmptyStatusType));
}

#[rstest]
fn status_type_trims_surrounding_whitespace() {
    let parsed = StatusType::new("  in-progress ").expect("valid status type");
    assert_eq!(parsed.as_str(), "in-progress");
}

#[rstest]
fn task_rejects_blank_title() {
    let result = Task::new(" ", TaskStatus::new(status_type("todo")));
    assert_eq!(result, Err(BoardDomainError::EmptyTaskTitle));
}

#[rstest]
fn with_status_keeps_identity_and_other_fields() {
    let original = task(7, "todo").with_description("write docs");
    let moved = original
        .clone()
        .with_status(TaskStatus::new(status_type("done")).with_label("Done"));

    assert_eq!(moved.id(), original.id());
    assert_eq!(moved.description(), Some("write docs"));
    assert_eq!(moved.status_type().as_str(), "done");
    assert_eq!(moved.status().label(), Some("Done"));
}

#[rstest]
fn task_decodes_api_payload_with_status_type_key() {
    let payload = r#"{
        "id": "00000000-0000-0000-0000-00000000002a",
        "title": "Ship release",
        "status": { "type": "review", "label": "In review" },
        "due_date": "2024-05-17"
    }"#;

    let decoded: Task = serde_json::from_str(payload).expect("payload should decode");

    assert_eq!(decoded.id(), task_id(42));
    assert_eq!(decoded.status_type().as_str(), "review");
    assert_eq!(decoded.status().label(), Some("In review"));
    assert_eq!(decoded.description(), None);
    assert_eq!(decoded.due_date(), NaiveDate::from_ymd_opt(2024, 5, 17));
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_payload_with_blank_title_is_rejected(#[case] title: &str) {
    let payload = format!(
        r#"{{"id":"00000000-0000-0000-0000-000000000001","title":"{title}","status":{{"type":"todo"}}}}"#
    );

    let result = serde_json::from_str::<Task>(&payload);

    let err = result.expect_err("blank title should be rejected");
    assert!(err.to_string().contains(&BoardDomainError::EmptyTaskTitle.to_string()));
}

#[rstest]
fn task_payload_with_blank_status_type_is_rejected() {
    let payload = r#"{
        "id": "00000000-0000-0000-0000-000000000001",
        "title": "Broken",
        "status": { "type": "" }
    }"#;

    assert!(serde_json::from_str::<Task>(payload).is_err());
}

#[rstest]
fn encoded_status_uses_type_key() {
    let encoded = serde_json::to_value(task(1, "todo")).expect("task should encode");
    assert_eq!(encoded["status"]["type"], "todo");
    assert!(encoded.get("description").is_none());
}

#[rstest]
fn column_remove_keeps_remaining_order() {
    let mut column = BoardColumn::new(status_type("todo"));
    for id in 1..=4 {
        column.push(task_id(id));
    }

    assert!(column.remove(task_id(2)));
    assert!(!column.remove(task_id(2)));
    assert_eq!(column.task_ids(), &[task_id(1), task_id(3), task_id(4)]);
    assert_eq!(column.len(), 3);
}

#[rstest]
fn board_and_task_ids_share_uuid_behaviour() {
    let uuid = Uuid::from_u128(0x2a);
    let board = BoardId::from_uuid(uuid);
    let task = TaskId::from_uuid(uuid);

    assert_eq!(board.into_inner(), task.into_inner());
    assert_eq!(board.as_ref(), &uuid);
    assert_eq!(board.to_string(), uuid.to_string());
    assert_eq!(
        serde_json::to_value(board).expect("board id should encode"),
        serde_json::to_value(task).expect("task id should encode")
    );
    assert_ne!(BoardId::default(), BoardId::default());
}
