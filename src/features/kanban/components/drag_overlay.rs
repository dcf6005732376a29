use leptos::prelude::*;

use super::task_card::TaskCard;
use crate::features::kanban::hooks::expect_board;

#[component]
pub fn DragOverlay() -> impl IntoView {
    let board = expect_board();

    view! {
        <div class="drag-overlay">
            {move || board.active_task().map(|task| view! { <TaskCard task=task overlay=true /> })}
        </div>
    }
}
