use leptos::prelude::*;

use crate::features::kanban::hooks::expect_board;

#[component]
pub fn KanbanHeader(add_target: WriteSignal<Option<String>>) -> impl IntoView {
    let board = expect_board();

    // The header button always files new tasks into the first column.
    let open_modal = move |_| {
        if let Some(first) = board.first_column_id() {
            add_target.set(Some(first));
        }
    };

    view! {
        <header class="kanban-header">
            <div>
                <h1>"Kanban Board"</h1>
                <p class="subtitle">"Organize and track your project tasks"</p>
            </div>
            <div class="kanban-actions">
                <button class="btn-primary" on:click=open_modal>"+ Add Task"</button>
            </div>
        </header>
    }
}
