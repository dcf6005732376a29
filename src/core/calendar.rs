use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use super::models::{CalendarEvent, EventDraft};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Month => "month",
            CalendarView::Week => "week",
            CalendarView::Day => "day",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Month => "Month",
            CalendarView::Week => "Week",
            CalendarView::Day => "Day",
        }
    }

    pub fn all() -> Vec<CalendarView> {
        vec![CalendarView::Month, CalendarView::Week, CalendarView::Day]
    }

    /// The date one period after `date` (a month, a week or a day).
    pub fn next(&self, date: NaiveDate) -> NaiveDate {
        let moved = match self {
            CalendarView::Month => date.checked_add_months(Months::new(1)),
            CalendarView::Week => date.checked_add_days(Days::new(7)),
            CalendarView::Day => date.checked_add_days(Days::new(1)),
        };
        moved.unwrap_or(date)
    }

    pub fn prev(&self, date: NaiveDate) -> NaiveDate {
        let moved = match self {
            CalendarView::Month => date.checked_sub_months(Months::new(1)),
            CalendarView::Week => date.checked_sub_days(Days::new(7)),
            CalendarView::Day => date.checked_sub_days(Days::new(1)),
        };
        moved.unwrap_or(date)
    }

    /// Heading for the period containing `date`.
    pub fn title(&self, date: NaiveDate) -> String {
        match self {
            CalendarView::Month => date.format("%B %Y").to_string(),
            CalendarView::Week => {
                let start = start_of_week(date);
                let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
                format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
            }
            CalendarView::Day => date.format("%A, %B %-d, %Y").to_string(),
        }
    }
}

/// The local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    start_of_week(date).iter_days().take(7).collect()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Every day of the month containing `date`, in order.
pub fn month_days(date: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(date);
    first
        .iter_days()
        .take_while(|day| day.month() == first.month())
        .collect()
}

/// Month days laid out on a Sunday-first grid; `None` pads the leading and trailing cells.
pub fn month_grid(date: NaiveDate) -> Vec<Option<NaiveDate>> {
    let days = month_days(date);
    let leading = days
        .first()
        .map(|d| d.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0);

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    cells.extend(days.into_iter().map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

/// `14:05` renders as `2:05 PM`, midnight as `12:00 AM`.
pub fn format_time_12h(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// The calendar's events, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    events: Vec<CalendarEvent>,
    next_id: u64,
}

impl Schedule {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { events, next_id }
    }

    pub fn add_event(&mut self, draft: EventDraft) -> CalendarEvent {
        let event = CalendarEvent::from_draft(self.next_id, draft);
        self.next_id += 1;
        self.events.push(event.clone());

        debug!(event_id = event.id, date = %event.date, "event added");
        event
    }

    /// Events on `date`, earliest first. Events at the same time keep insertion order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<CalendarEvent> {
        let mut day: Vec<CalendarEvent> = self
            .events
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect();
        day.sort_by_key(|e| e.time);
        day
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_step_clamps_to_last_day() {
        assert_eq!(CalendarView::Month.next(date(2024, 1, 31)), date(2024, 2, 29));
        assert_eq!(CalendarView::Month.prev(date(2024, 3, 31)), date(2024, 2, 29));
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2024-01-17 is a Wednesday.
        assert_eq!(start_of_week(date(2024, 1, 17)), date(2024, 1, 14));
        assert_eq!(start_of_week(date(2024, 1, 14)), date(2024, 1, 14));
    }

    #[test]
    fn twelve_hour_clock() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(format_time_12h(t(0, 0)), "12:00 AM");
        assert_eq!(format_time_12h(t(12, 30)), "12:30 PM");
        assert_eq!(format_time_12h(t(15, 5)), "3:05 PM");
    }
}
