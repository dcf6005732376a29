pub mod agenda;
pub mod day_cell;
pub mod day_view;
pub mod event_modal;
pub mod period_grid;
pub mod toolbar;

pub use agenda::Agenda;
pub use day_cell::DayCell;
pub use day_view::DayView;
pub use event_modal::EventModal;
pub use period_grid::{MonthGrid, WeekGrid};
pub use toolbar::CalendarToolbar;
