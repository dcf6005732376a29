use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use super::error::BoardError;
use super::models::{Board, Column, Task, TaskDraft};

/// Source of fresh task identifiers.
pub trait TaskIdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl TaskIdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic ids (`task-1`, `task-2`, ...). Handy when ids have to be predictable.
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    prefix: String,
    next: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new("task-")
    }
}

impl TaskIdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: String, to: String },
    /// The task already lived in the target column.
    Unchanged,
}

/// Owns the kanban columns and the tasks inside them.
///
/// Every task id lives in exactly one column. Mutations look everything up
/// before touching state, so a failed call leaves the board as it was.
#[derive(Debug, Clone)]
pub struct BoardStore<G = UuidGenerator> {
    columns: Vec<Column>,
    ids: G,
}

impl<G: Default> Default for BoardStore<G> {
    /// A board with no columns.
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            ids: G::default(),
        }
    }
}

impl BoardStore<UuidGenerator> {
    pub fn new(board: Board) -> Result<Self, BoardError> {
        Self::with_generator(board, UuidGenerator)
    }
}

impl<G: TaskIdGenerator> BoardStore<G> {
    pub fn with_generator(board: Board, ids: G) -> Result<Self, BoardError> {
        validate(&board)?;
        Ok(Self {
            columns: board.columns,
            ids,
        })
    }

    pub fn add_task(&mut self, column_id: &str, draft: TaskDraft) -> Result<Task, BoardError> {
        let column_index = self.column_index(column_id).ok_or_else(|| {
            warn!(column_id, "add_task rejected: unknown column");
            BoardError::ColumnNotFound(column_id.to_string())
        })?;

        let id = self.fresh_id();
        let task = Task::from_draft(id, draft);
        self.columns[column_index].tasks.push(task.clone());

        debug!(task_id = %task.id, column_id, "task added");
        Ok(task)
    }

    /// Looks up the task a drag gesture picked up. Never mutates.
    pub fn start_drag(&self, task_id: &str) -> Option<Task> {
        self.locate(task_id)
            .map(|(col, idx)| self.columns[col].tasks[idx].clone())
    }

    pub fn move_task(
        &mut self,
        task_id: &str,
        target_column_id: &str,
    ) -> Result<MoveOutcome, BoardError> {
        let (source, index) = self.locate(task_id).ok_or_else(|| {
            warn!(task_id, "move_task rejected: unknown task");
            BoardError::TaskNotFound(task_id.to_string())
        })?;
        let target = self.column_index(target_column_id).ok_or_else(|| {
            warn!(task_id, target_column_id, "move_task rejected: unknown column");
            BoardError::ColumnNotFound(target_column_id.to_string())
        })?;

        // Reordering inside a column is not supported; dropping on the home column does nothing.
        if source == target {
            debug!(task_id, column_id = target_column_id, "same-column drop ignored");
            return Ok(MoveOutcome::Unchanged);
        }

        let task = self.columns[source].tasks.remove(index);
        self.columns[target].tasks.push(task);

        let from = self.columns[source].id.clone();
        debug!(task_id, from = %from, to = target_column_id, "task moved");
        Ok(MoveOutcome::Moved {
            from,
            to: target_column_id.to_string(),
        })
    }

    pub fn snapshot(&self) -> Board {
        Board::new(self.columns.clone())
    }

    pub fn find_task(&self, task_id: &str) -> Option<(Task, String)> {
        self.locate(task_id).map(|(col, idx)| {
            let column = &self.columns[col];
            (column.tasks[idx].clone(), column.id.clone())
        })
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_ids(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    fn locate(&self, task_id: &str) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(col, column)| column.position_of(task_id).map(|idx| (col, idx)))
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.locate(&id).is_none() {
                return id;
            }
            debug!(id = %id, "generated id already taken, drawing another");
        }
    }
}

fn validate(board: &Board) -> Result<(), BoardError> {
    let mut column_ids = HashSet::new();
    let mut task_ids = HashSet::new();

    for column in &board.columns {
        if !column_ids.insert(column.id.as_str()) {
            return Err(BoardError::DuplicateColumn(column.id.clone()));
        }
        for task in &column.tasks {
            if !task_ids.insert(task.id.as_str()) {
                return Err(BoardError::DuplicateTask(task.id.clone()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str) -> Task {
        Task::from_draft(id.to_string(), TaskDraft::new(format!("Task {id}")))
    }

    #[test]
    fn rejects_duplicate_columns() {
        let board = Board::new(vec![Column::new("todo", "To Do"), Column::new("todo", "Again")]);
        let err = BoardStore::new(board).unwrap_err();
        assert_eq!(err, BoardError::DuplicateColumn("todo".into()));
    }

    #[test]
    fn rejects_task_present_in_two_columns() {
        let board = Board::new(vec![
            Column::new("todo", "To Do").with_tasks(vec![task("a")]),
            Column::new("done", "Done").with_tasks(vec![task("a")]),
        ]);
        let err = BoardStore::new(board).unwrap_err();
        assert_eq!(err, BoardError::DuplicateTask("a".into()));
    }

    #[test]
    fn generated_ids_skip_existing_ones() {
        let board = Board::new(vec![
            Column::new("todo", "To Do").with_tasks(vec![task("task-1"), task("task-2")]),
        ]);
        let mut store = BoardStore::with_generator(board, SequentialGenerator::default()).unwrap();

        let added = store.add_task("todo", TaskDraft::new("Fresh")).unwrap();
        assert_eq!(added.id, "task-3");
    }
}
