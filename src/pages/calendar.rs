use leptos::prelude::*;

use crate::core::models::EventKind;
use crate::core::CalendarView;
use crate::features::calendar::{
    use_calendar, Agenda, CalendarToolbar, DayView, EventModal, MonthGrid, WeekGrid,
};

#[component]
pub fn Calendar() -> impl IntoView {
    let cal = use_calendar();

    // Type the "Add New Event" dialog opens with; `None` keeps it closed.
    let add_kind = RwSignal::new(None::<EventKind>);

    view! {
        <div class="calendar-page">
            <header class="page-header">
                <div>
                    <h1>"Calendar"</h1>
                    <p class="subtitle">"Manage your schedule and events"</p>
                </div>
                <button class="btn-primary" on:click=move |_| add_kind.set(Some(EventKind::Event))>
                    "+ Add Event"
                </button>
            </header>

            <div class="calendar-layout">
                <section class="calendar-main card">
                    <CalendarToolbar />
                    {move || match cal.view.get() {
                        CalendarView::Month => view! { <MonthGrid /> }.into_any(),
                        CalendarView::Week => view! { <WeekGrid /> }.into_any(),
                        CalendarView::Day => view! { <DayView /> }.into_any(),
                    }}
                </section>
                <Agenda add_kind=add_kind.write_only() />
            </div>

            <EventModal kind=add_kind />
        </div>
    }
}
