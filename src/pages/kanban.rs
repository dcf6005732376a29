use leptos::prelude::*;

use crate::features::kanban::{use_board, DragOverlay, KanbanColumn, KanbanHeader, TaskModal};

#[component]
pub fn Kanban() -> impl IntoView {
    let board = use_board();

    // Column the "Add New Task" dialog is filing into; `None` keeps it closed.
    let add_target = RwSignal::new(None::<String>);

    view! {
        <div class="kanban-page">
            <KanbanHeader add_target=add_target.write_only() />

            <div class="kanban-board">
                {move || {
                    board
                        .columns()
                        .into_iter()
                        .map(|column| view! {
                            <KanbanColumn column=column add_target=add_target.write_only() />
                        })
                        .collect_view()
                }}
            </div>

            <DragOverlay />
            <TaskModal target=add_target />
        </div>
    }
}
