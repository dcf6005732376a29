use chrono::NaiveDate;
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::core::models::{CalendarEvent, EventDraft};
use crate::core::seed::demo_events;
use crate::core::calendar::today;
use crate::core::{CalendarView, Schedule};

/// Calendar state shared by the page's components.
///
/// `current` drives the visible period, `selected` the agenda. In day view
/// the two move together.
#[derive(Clone, Copy)]
pub struct CalendarHandle {
    schedule: RwSignal<Schedule>,
    pub view: RwSignal<CalendarView>,
    pub current: RwSignal<NaiveDate>,
    pub selected: RwSignal<NaiveDate>,
    today: NaiveDate,
}

impl CalendarHandle {
    pub fn new(schedule: Schedule, today: NaiveDate) -> Self {
        Self {
            schedule: RwSignal::new(schedule),
            view: RwSignal::new(CalendarView::Month),
            current: RwSignal::new(today),
            selected: RwSignal::new(today),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<CalendarEvent> {
        self.schedule.with(|s| s.events_on(date))
    }

    /// `None` if the calendar was unmounted before the event could be stored.
    pub fn add_event(&self, draft: EventDraft) -> Option<CalendarEvent> {
        let added = self.schedule.try_update(|s| s.add_event(draft));
        if added.is_none() {
            warn!("schedule disposed; add_event dropped");
        }
        added
    }

    pub fn title(&self) -> String {
        self.view.get().title(self.current.get())
    }

    pub fn set_view(&self, view: CalendarView) {
        if view == CalendarView::Day {
            self.current.set(self.selected.get_untracked());
        }
        self.view.set(view);
    }

    pub fn next(&self) {
        let view = self.view.get_untracked();
        self.move_to(view.next(self.current.get_untracked()));
    }

    pub fn prev(&self) {
        let view = self.view.get_untracked();
        self.move_to(view.prev(self.current.get_untracked()));
    }

    pub fn go_today(&self) {
        self.move_to(self.today);
    }

    pub fn select(&self, date: NaiveDate) {
        self.selected.set(date);
    }

    fn move_to(&self, date: NaiveDate) {
        debug!(%date, "calendar period changed");
        self.current.set(date);
        if self.view.get_untracked() == CalendarView::Day {
            self.selected.set(date);
        }
    }
}

pub fn use_calendar() -> CalendarHandle {
    let handle = CalendarHandle::new(Schedule::new(demo_events()), today());
    provide_context(handle);
    handle
}

pub fn expect_calendar() -> CalendarHandle {
    use_context::<CalendarHandle>().expect("CalendarHandle context; call use_calendar() in a parent")
}
