use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::models::Task;
use crate::features::kanban::hooks::expect_board;
use crate::features::kanban::services::write_task_id;
const VISIBLE_TAGS: usize = 2;

#[component]
pub fn TaskCard(
    task: Task,
    /// Rendered inside the drag overlay: not draggable itself.
    #[prop(optional)]
    overlay: bool,
) -> impl IntoView {
    let board = expect_board();

    let id_for_start = task.id.clone();
    let on_drag_start = move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            write_task_id(&transfer, &id_for_start);
        }
        board.drag_start(&id_for_start);
    };

    // Fires after `drop` too; only a drag that is still active was released outside a column.
    let id_for_end = task.id.clone();
    let on_drag_end = move |_: DragEvent| {
        if board.is_dragging(&id_for_end) {
            board.drop_on(&id_for_end, None);
        }
    };

    let id_for_class = task.id.clone();
    let (tags, hidden_tags) = task.visible_tags(VISIBLE_TAGS);
    let tags = tags.to_vec();
    let priority = task.priority;

    view! {
        <div
            class="task-card"
            class:overlay=overlay
            class:dragging=move || !overlay && board.is_dragging(&id_for_class)
            draggable=if overlay { "false" } else { "true" }
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
        >
            <div class="task-card-header">
                <h4 class="task-title">{task.title.clone()}</h4>
            </div>
            <p class="task-description">{task.description.clone()}</p>
            <div class="task-meta">
                <span class=format!("priority-badge priority-{}", priority.as_str())>
                    {priority.as_str()}
                </span>
                {(!task.assignee.is_empty()).then(|| view! {
                    <span class="task-assignee">{task.assignee.clone()}</span>
                })}
            </div>
            <div class="task-footer">
                <div class="task-tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                    {(hidden_tags > 0).then(|| view! {
                        <span class="tag tag-more">{format!("+{}", hidden_tags)}</span>
                    })}
                </div>
                {task.due_label().map(|due| view! { <span class="task-due">{due}</span> })}
            </div>
        </div>
    }
}
