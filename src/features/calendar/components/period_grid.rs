use leptos::prelude::*;

use super::day_cell::DayCell;
use crate::core::calendar::{month_grid, week_days, WEEKDAY_LABELS};
use crate::features::calendar::hooks::expect_calendar;

#[component]
pub fn MonthGrid() -> impl IntoView {
    let cal = expect_calendar();

    view! {
        <div class="calendar-weekdays">
            {WEEKDAY_LABELS.iter().map(|day| view! { <div>{*day}</div> }).collect_view()}
        </div>
        <div class="calendar-grid">
            {move || {
                month_grid(cal.current.get())
                    .into_iter()
                    .map(|cell| match cell {
                        Some(date) => view! { <DayCell date=date /> }.into_any(),
                        None => view! { <div class="calendar-day calendar-day--blank"></div> }.into_any(),
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn WeekGrid() -> impl IntoView {
    let cal = expect_calendar();
    let days = move || week_days(cal.current.get());

    view! {
        <div class="calendar-weekdays">
            {move || {
                days()
                    .into_iter()
                    .map(|day| view! { <div>{day.format("%a %-d").to_string()}</div> })
                    .collect_view()
            }}
        </div>
        <div class="calendar-grid calendar-grid--week">
            {move || days().into_iter().map(|date| view! { <DayCell date=date /> }).collect_view()}
        </div>
    }
}
