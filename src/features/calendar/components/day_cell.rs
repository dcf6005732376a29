use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::features::calendar::hooks::expect_calendar;

const VISIBLE_EVENTS: usize = 2;

#[component]
pub fn DayCell(date: NaiveDate) -> impl IntoView {
    let cal = expect_calendar();

    view! {
        <div
            class="calendar-day"
            class:selected=move || cal.selected.get() == date
            class:today=move || cal.today() == date
            on:click=move |_| cal.select(date)
        >
            <div class="calendar-day-number">{date.day()}</div>
            <div class="calendar-day-events">
                {move || {
                    let events = cal.events_on(date);
                    let hidden = events.len().saturating_sub(VISIBLE_EVENTS);
                    view! {
                        {events
                            .into_iter()
                            .take(VISIBLE_EVENTS)
                            .map(|event| view! {
                                <div class=event.kind.css_class() title=event.title.clone()>
                                    {event.title.clone()}
                                </div>
                            })
                            .collect_view()}
                        {(hidden > 0).then(|| view! {
                            <div class="calendar-more">{format!("+{} more", hidden)}</div>
                        })}
                    }
                }}
            </div>
        </div>
    }
}
