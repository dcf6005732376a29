use std::collections::HashSet;

use admin_board::core::models::{Board, Column, Task, TaskDraft};
use admin_board::core::{BoardError, BoardStore, MoveOutcome};
use proptest::prelude::*;

const COLUMNS: [&str; 4] = ["todo", "progress", "review", "done"];

#[derive(Debug, Clone)]
enum Op {
    Add { column: usize },
    Move { task: usize, column: usize },
    MoveUnknownTask { column: usize },
    MoveToUnknownColumn { task: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..COLUMNS.len()).prop_map(|column| Op::Add { column }),
        6 => (0..64usize, 0..COLUMNS.len()).prop_map(|(task, column)| Op::Move { task, column }),
        1 => (0..COLUMNS.len()).prop_map(|column| Op::MoveUnknownTask { column }),
        1 => (0..64usize).prop_map(|task| Op::MoveToUnknownColumn { task }),
    ]
}

fn seeded() -> BoardStore {
    let columns = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let tasks = (0..2)
                .map(|n| Task::from_draft(format!("{id}-{n}"), TaskDraft::new(format!("seed {i}.{n}"))))
                .collect();
            Column::new(*id, id.to_uppercase()).with_tasks(tasks)
        })
        .collect();
    BoardStore::new(Board::new(columns)).unwrap()
}

fn all_ids(board: &Board) -> Vec<String> {
    board.tasks().map(|t| t.id.clone()).collect()
}

proptest! {
    #[test]
    fn every_task_lives_in_exactly_one_column(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = seeded();
        let mut expected_count = store.task_count();

        for op in ops {
            let before = store.snapshot();
            let ids = all_ids(&before);

            match op {
                Op::Add { column } => {
                    let added = store.add_task(COLUMNS[column], TaskDraft::new("generated")).unwrap();
                    prop_assert!(!ids.contains(&added.id));
                    let tail = store.column(COLUMNS[column]).unwrap().tasks.last().cloned();
                    prop_assert_eq!(tail, Some(added));
                    expected_count += 1;
                }
                Op::Move { task, column } => {
                    let task_id = &ids[task % ids.len()];
                    let (_, from) = store.find_task(task_id).unwrap();
                    let outcome = store.move_task(task_id, COLUMNS[column]).unwrap();

                    if from == COLUMNS[column] {
                        prop_assert_eq!(outcome, MoveOutcome::Unchanged);
                        prop_assert_eq!(store.snapshot(), before);
                    } else {
                        let (_, now) = store.find_task(task_id).unwrap();
                        prop_assert_eq!(now.as_str(), COLUMNS[column]);
                        let last = store.column(COLUMNS[column]).unwrap().tasks.last().map(|t| t.id.clone());
                        prop_assert_eq!(last.as_ref(), Some(task_id));
                        prop_assert!(store.column(&from).unwrap().position_of(task_id).is_none());
                    }
                }
                Op::MoveUnknownTask { column } => {
                    let err = store.move_task("ghost", COLUMNS[column]).unwrap_err();
                    prop_assert_eq!(err, BoardError::TaskNotFound("ghost".into()));
                    prop_assert_eq!(store.snapshot(), before);
                }
                Op::MoveToUnknownColumn { task } => {
                    let task_id = &ids[task % ids.len()];
                    let err = store.move_task(task_id, "archive").unwrap_err();
                    prop_assert_eq!(err, BoardError::ColumnNotFound("archive".into()));
                    prop_assert_eq!(store.snapshot(), before);
                }
            }

            let ids = all_ids(&store.snapshot());
            let unique: HashSet<&String> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
            prop_assert_eq!(ids.len(), expected_count);
        }
    }
}
