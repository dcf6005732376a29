use leptos::prelude::*;

use crate::core::calendar::format_time_12h;
use crate::core::models::EventKind;
use crate::features::calendar::hooks::expect_calendar;

/// Selected day's events plus the quick-add buttons.
#[component]
pub fn Agenda(add_kind: WriteSignal<Option<EventKind>>) -> impl IntoView {
    let cal = expect_calendar();

    view! {
        <aside class="calendar-agenda">
            <section class="card">
                <h3>{move || cal.selected.get().format("%B %-d, %Y").to_string()}</h3>
                {move || {
                    let events = cal.events_on(cal.selected.get());
                    if events.is_empty() {
                        return view! { <p class="empty">"No events scheduled"</p> }.into_any();
                    }
                    events
                        .into_iter()
                        .map(|event| view! {
                            <div class="agenda-item">
                                <span class=format!("agenda-dot {}", event.kind.css_class())></span>
                                <div>
                                    <p class="agenda-title">{event.title.clone()}</p>
                                    <p class="agenda-meta">{format_time_12h(event.time)}</p>
                                    {event.location.clone().map(|l| view! { <p class="agenda-meta">{l}</p> })}
                                    {event.description.clone().map(|d| view! { <p class="agenda-meta">{d}</p> })}
                                </div>
                            </div>
                        })
                        .collect_view()
                        .into_any()
                }}
            </section>
            <section class="card">
                <h3>"Quick Actions"</h3>
                <button class="quick-action" on:click=move |_| add_kind.set(Some(EventKind::Meeting))>
                    "Schedule Meeting"
                </button>
                <button class="quick-action" on:click=move |_| add_kind.set(Some(EventKind::Task))>
                    "Add Task"
                </button>
            </section>
        </aside>
    }
}
