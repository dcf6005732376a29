use leptos::prelude::*;

use crate::core::CalendarView;
use crate::features::calendar::hooks::expect_calendar;

#[component]
pub fn CalendarToolbar() -> impl IntoView {
    let cal = expect_calendar();

    view! {
        <div class="calendar-toolbar">
            <div class="calendar-nav">
                <button class="icon-button" title="Previous" on:click=move |_| cal.prev()>"‹"</button>
                <h2>{move || cal.title()}</h2>
                <button class="icon-button" title="Next" on:click=move |_| cal.next()>"›"</button>
            </div>
            <div class="segmented">
                {CalendarView::all()
                    .into_iter()
                    .map(|view| view! {
                        <button
                            class:active=move || cal.view.get() == view
                            on:click=move |_| cal.set_view(view)
                        >
                            {view.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            <button class="btn-secondary" on:click=move |_| cal.go_today()>"Today"</button>
        </div>
    }
}
