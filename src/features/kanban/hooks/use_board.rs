use leptos::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::models::{Column, Task, TaskDraft};
use crate::core::seed::seeded_store;
use crate::core::{BoardError, BoardStore, DragController, DropOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardHandleError {
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The owning view was unmounted and its signals released.
    #[error("board is no longer mounted")]
    Disposed,
}

/// Reactive access to the board for components.
///
/// The store sits behind a single signal, so every mutation goes through one
/// writer and readers re-render from a fresh snapshot.
#[derive(Clone, Copy)]
pub struct BoardHandle {
    store: RwSignal<BoardStore>,
    drag: RwSignal<DragController>,
}

impl BoardHandle {
    pub fn new(store: BoardStore) -> Self {
        Self {
            store: RwSignal::new(store),
            drag: RwSignal::new(DragController::new()),
        }
    }

    pub fn columns(&self) -> Vec<Column> {
        self.store.with(|store| store.snapshot().columns)
    }

    pub fn first_column_id(&self) -> Option<String> {
        self.store.with(|store| store.column_ids().into_iter().next())
    }

    pub fn active_task(&self) -> Option<Task> {
        self.drag.with(|drag| drag.active().cloned())
    }

    pub fn is_dragging(&self, task_id: &str) -> bool {
        self.drag.with(|drag| drag.is_dragging(task_id))
    }

    pub fn add_task(&self, column_id: &str, draft: TaskDraft) -> Result<Task, BoardHandleError> {
        let added = self
            .store
            .try_update(|store| store.add_task(column_id, draft))
            .ok_or_else(|| {
                warn!("board store disposed; add_task dropped");
                BoardHandleError::Disposed
            })?;
        Ok(added?)
    }

    pub fn drag_start(&self, task_id: &str) {
        let store = self.store;
        self.drag.update(|drag| {
            store.with_untracked(|store| {
                drag.drag_start(store, task_id);
            });
        });
    }

    /// Finishes a gesture. `target` is the column under the pointer, if any.
    pub fn try_drop_on(
        &self,
        task_id: &str,
        target: Option<&str>,
    ) -> Result<DropOutcome, BoardHandleError> {
        let store = self.store;
        let outcome = self
            .drag
            .try_update(|drag| store.try_update(|store| drag.drag_end(store, task_id, target)))
            .flatten()
            .ok_or(BoardHandleError::Disposed)?;
        Ok(outcome?)
    }

    /// [`try_drop_on`](Self::try_drop_on) for event handlers: failures are logged, not returned.
    pub fn drop_on(&self, task_id: &str, target: Option<&str>) {
        match self.try_drop_on(task_id, target) {
            Ok(outcome) => debug!(task_id, ?outcome, "drop handled"),
            Err(BoardHandleError::Disposed) => warn!(task_id, "board store disposed; drop ignored"),
            Err(e) => warn!(task_id, "drop rejected: {}", e),
        }
    }

    pub fn drag_cancel(&self) {
        if self.drag.with_untracked(|drag| drag.active().is_some()) {
            self.drag.update(DragController::drag_cancel);
            debug!("drag cancelled");
        }
    }
}

/// Creates the board for the current view and shares it through context.
pub fn use_board() -> BoardHandle {
    let handle = BoardHandle::new(seeded_store());
    provide_context(handle);
    handle
}

pub fn expect_board() -> BoardHandle {
    use_context::<BoardHandle>().expect("BoardHandle context; call use_board() in a parent")
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::seeded_store;

    fn handle() -> BoardHandle {
        BoardHandle::new(seeded_store())
    }

    #[test]
    fn add_task_reports_unknown_column_as_board_error() {
        let board = handle();
        let err = board.add_task("nope", TaskDraft::new("Lost")).unwrap_err();
        assert_eq!(err, BoardHandleError::Board(BoardError::ColumnNotFound("nope".into())));
    }

    #[test]
    fn add_task_on_disposed_store_is_not_blamed_on_the_column() {
        let board = handle();
        board.store.dispose();

        let err = board.add_task("todo", TaskDraft::new("Late")).unwrap_err();
        assert_eq!(err, BoardHandleError::Disposed);
    }

    #[test]
    fn drop_after_disposal_is_reported() {
        let board = handle();
        board.drag_start("missing");
        board.drag.dispose();

        assert_eq!(board.try_drop_on("missing", Some("done")), Err(BoardHandleError::Disposed));
    }
}
