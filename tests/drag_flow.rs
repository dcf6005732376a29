use admin_board::core::models::{Board, Column, Task, TaskDraft};
use admin_board::core::{BoardError, BoardStore, DragController, DropOutcome};
use pretty_assertions::assert_eq;

fn store() -> BoardStore {
    let board = Board::new(vec![
        Column::new("todo", "To Do").with_tasks(vec![
            Task::from_draft("A".into(), TaskDraft::new("Alpha")),
            Task::from_draft("B".into(), TaskDraft::new("Beta")),
        ]),
        Column::new("done", "Done"),
    ]);
    BoardStore::new(board).unwrap()
}

#[test]
fn drag_start_marks_active_task_without_mutating() {
    let store = store();
    let before = store.snapshot();
    let mut drag = DragController::new();

    let picked = drag.drag_start(&store, "A").unwrap();

    assert_eq!(picked.id, "A");
    assert_eq!(drag.active().map(|t| t.id.as_str()), Some("A"));
    assert!(drag.is_dragging("A"));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn drag_start_on_unknown_task_clears_marker() {
    let store = store();
    let mut drag = DragController::new();
    drag.drag_start(&store, "A");

    assert!(drag.drag_start(&store, "ghost").is_none());
    assert!(drag.active().is_none());
}

#[test]
fn drop_on_other_column_moves_task() {
    let mut store = store();
    let mut drag = DragController::new();
    drag.drag_start(&store, "A");

    let outcome = drag.drag_end(&mut store, "A", Some("done")).unwrap();

    assert_eq!(
        outcome,
        DropOutcome::Moved {
            from: "todo".into(),
            to: "done".into()
        }
    );
    assert!(drag.active().is_none());
    assert_eq!(store.find_task("A").map(|(_, c)| c), Some("done".to_string()));
}

#[test]
fn drop_outside_any_column_is_a_cancel() {
    let mut store = store();
    let before = store.snapshot();
    let mut drag = DragController::new();
    drag.drag_start(&store, "B");

    let outcome = drag.drag_end(&mut store, "B", None).unwrap();

    assert_eq!(outcome, DropOutcome::Cancelled);
    assert!(drag.active().is_none());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn drop_on_home_column_changes_nothing() {
    let mut store = store();
    let before = store.snapshot();
    let mut drag = DragController::new();
    drag.drag_start(&store, "A");

    let outcome = drag.drag_end(&mut store, "A", Some("todo")).unwrap();

    assert_eq!(outcome, DropOutcome::Unchanged);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn drop_on_unknown_column_surfaces_error_and_clears_marker() {
    let mut store = store();
    let before = store.snapshot();
    let mut drag = DragController::new();
    drag.drag_start(&store, "A");

    let err = drag.drag_end(&mut store, "A", Some("trash")).unwrap_err();

    assert_eq!(err, BoardError::ColumnNotFound("trash".into()));
    assert!(drag.active().is_none());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn drag_cancel_clears_marker() {
    let store = store();
    let mut drag = DragController::new();
    drag.drag_start(&store, "A");

    drag.drag_cancel();

    assert_eq!(drag, DragController::default());
}
