use tracing::debug;

use super::error::BoardError;
use super::models::Task;
use super::store::{BoardStore, MoveOutcome, TaskIdGenerator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Moved { from: String, to: String },
    /// Dropped back onto the column it came from.
    Unchanged,
    /// Released outside any column; the store was not consulted.
    Cancelled,
}

impl From<MoveOutcome> for DropOutcome {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Moved { from, to } => DropOutcome::Moved { from, to },
            MoveOutcome::Unchanged => DropOutcome::Unchanged,
        }
    }
}

/// Tracks the task currently being dragged and turns drops into moves.
///
/// The pointer tracking in between `drag_start` and `drag_end` belongs to the
/// input layer; this type only sees the two ends of the gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragController {
    active: Option<Task>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&Task> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self, task_id: &str) -> bool {
        self.active.as_ref().is_some_and(|t| t.id == task_id)
    }

    pub fn drag_start<G: TaskIdGenerator>(
        &mut self,
        store: &BoardStore<G>,
        task_id: &str,
    ) -> Option<Task> {
        self.active = store.start_drag(task_id);
        debug!(task_id, found = self.active.is_some(), "drag started");
        self.active.clone()
    }

    pub fn drag_end<G: TaskIdGenerator>(
        &mut self,
        store: &mut BoardStore<G>,
        task_id: &str,
        target_column_id: Option<&str>,
    ) -> Result<DropOutcome, BoardError> {
        self.active = None;

        let Some(target) = target_column_id else {
            debug!(task_id, "drag ended outside any column");
            return Ok(DropOutcome::Cancelled);
        };

        store.move_task(task_id, target).map(DropOutcome::from)
    }

    pub fn drag_cancel(&mut self) {
        self.active = None;
    }
}
