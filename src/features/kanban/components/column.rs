use leptos::ev::DragEvent;
use leptos::prelude::*;

use super::task_card::TaskCard;
use crate::core::models::Column;
use crate::features::kanban::hooks::expect_board;
use crate::features::kanban::services::read_task_id;

#[component]
pub fn KanbanColumn(
    column: Column,
    /// Column the "add task" dialog should target; `Some` opens it.
    add_target: WriteSignal<Option<String>>,
) -> impl IntoView {
    let board = expect_board();
    let column_class = column.css_class();
    let Column { id, title, tasks, .. } = column;

    let column_id = id.clone();
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let task_id = ev
            .data_transfer()
            .and_then(|transfer| read_task_id(&transfer))
            .or_else(|| board.active_task().map(|t| t.id));

        if let Some(task_id) = task_id {
            board.drop_on(&task_id, Some(&column_id));
        }
    };

    let column_id_for_add = id.clone();
    let count = tasks.len();

    view! {
        <div class=column_class>
            <div class="column-header">
                <h3>{title}</h3>
                <span class="task-count">{count}</span>
                <button
                    class="column-add"
                    title="Add task"
                    on:click=move |_| add_target.set(Some(column_id_for_add.clone()))
                >
                    "+"
                </button>
            </div>
            <div
                class="column-content"
                data-column-id=id
                on:dragover=|ev: DragEvent| ev.prevent_default()
                on:drop=on_drop
            >
                {tasks
                    .into_iter()
                    .map(|task| view! { <TaskCard task=task /> })
                    .collect_view()}
            </div>
        </div>
    }
}
