use leptos::prelude::*;

use crate::core::calendar::format_time_12h;
use crate::features::calendar::hooks::expect_calendar;

#[component]
pub fn DayView() -> impl IntoView {
    let cal = expect_calendar();

    view! {
        <div class="calendar-day-view">
            <h3 class:today=move || cal.selected.get() == cal.today()>
                {move || cal.selected.get().format("%A, %B %-d, %Y").to_string()}
            </h3>
            {move || {
                let events = cal.events_on(cal.selected.get());
                if events.is_empty() {
                    return view! { <p class="empty">"No events scheduled"</p> }.into_any();
                }
                events
                    .into_iter()
                    .map(|event| view! {
                        <div class="day-event">
                            <h4>{event.title.clone()}</h4>
                            {event.description.clone().map(|d| view! { <p>{d}</p> })}
                            <div class="event-meta">
                                <span>{format_time_12h(event.time)}</span>
                                {event.location.clone().map(|l| view! { <span>{l}</span> })}
                            </div>
                        </div>
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
