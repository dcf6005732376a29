use leptos::ev;
use leptos::prelude::*;
use tracing::{info, warn};

use crate::core::models::Priority;
use crate::features::kanban::hooks::expect_board;
use crate::features::kanban::services::TaskForm;

#[component]
pub fn TaskModal(
    /// Target column; the dialog is open while this is `Some`.
    target: RwSignal<Option<String>>,
) -> impl IntoView {
    let board = expect_board();

    let form = RwSignal::new(TaskForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let close = move || {
        target.set(None);
        set_error.set(None);
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(column_id) = target.get_untracked() else {
            return;
        };

        let draft = match form.with_untracked(TaskForm::validate) {
            Ok(draft) => draft,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        match board.add_task(&column_id, draft) {
            Ok(task) => {
                info!(task_id = %task.id, column_id = %column_id, "task created");
                form.set(TaskForm::default());
                close();
            }
            Err(e) => {
                warn!("Failed to add task: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <Show when=move || target.with(Option::is_some)>
            <div class="modal-backdrop">
                <div class="task-modal">
                    <div class="modal-header">
                        <h3>"Add New Task"</h3>
                        <button type="button" class="modal-close" on:click=move |_| close()>"×"</button>
                    </div>
                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label>"Title *"</label>
                            <input
                                type="text"
                                required
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.title.clone())
                            />
                        </div>
                        <div class="form-group">
                            <label>"Description"</label>
                            <textarea
                                rows="3"
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.description.clone())
                            ></textarea>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Priority"</label>
                                <select
                                    on:change=move |ev| form.update(|f| f.priority = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.priority.clone())
                                >
                                    {Priority::all()
                                        .into_iter()
                                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label>"Assignee"</label>
                                <input
                                    type="text"
                                    on:input=move |ev| form.update(|f| f.assignee = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.assignee.clone())
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label>"Due Date"</label>
                            <input
                                type="date"
                                on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.due_date.clone())
                            />
                        </div>
                        <div class="form-group">
                            <label>"Tags (comma separated)"</label>
                            <input
                                type="text"
                                placeholder="Design, Frontend, Urgent"
                                on:input=move |ev| form.update(|f| f.tags = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.tags.clone())
                            />
                        </div>
                        {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="btn-primary">"Add Task"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
