use leptos::ev;
use leptos::prelude::*;
use tracing::info;

use crate::core::models::EventKind;
use crate::features::calendar::hooks::expect_calendar;
use crate::features::calendar::services::EventForm;

#[component]
pub fn EventModal(
    /// Preselected event type; the dialog is open while this is `Some`.
    kind: RwSignal<Option<EventKind>>,
) -> impl IntoView {
    let cal = expect_calendar();

    let form = RwSignal::new(EventForm::new(cal.selected.get_untracked(), EventKind::Event));
    let (error, set_error) = signal::<Option<String>>(None);

    // Each opening starts from a blank form on the selected day.
    Effect::new(move |_| {
        if let Some(kind) = kind.get() {
            form.set(EventForm::new(cal.selected.get_untracked(), kind));
        }
    });

    let close = move || {
        kind.set(None);
        set_error.set(None);
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let draft = match form.with_untracked(EventForm::validate) {
            Ok(draft) => draft,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        if let Some(event) = cal.add_event(draft) {
            info!(event_id = event.id, date = %event.date, "event created");
            close();
        }
    };

    view! {
        <Show when=move || kind.with(Option::is_some)>
            <div class="modal-backdrop">
                <div class="task-modal">
                    <div class="modal-header">
                        <h3>"Add New Event"</h3>
                        <button type="button" class="modal-close" on:click=move |_| close()>"×"</button>
                    </div>
                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label>"Event Title *"</label>
                            <input
                                type="text"
                                required
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.title.clone())
                            />
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Date"</label>
                                <input
                                    type="date"
                                    on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.date.clone())
                                />
                            </div>
                            <div class="form-group">
                                <label>"Time *"</label>
                                <input
                                    type="time"
                                    required
                                    on:input=move |ev| form.update(|f| f.time = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.time.clone())
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label>"Location"</label>
                            <input
                                type="text"
                                on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.location.clone())
                            />
                        </div>
                        <div class="form-group">
                            <label>"Type"</label>
                            <select
                                on:change=move |ev| form.update(|f| f.kind = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.kind.clone())
                            >
                                {EventKind::all()
                                    .into_iter()
                                    .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Description"</label>
                            <textarea
                                rows="3"
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.description.clone())
                            ></textarea>
                        </div>
                        {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="btn-primary">"Add Event"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
