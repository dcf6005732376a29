pub mod use_calendar;

pub use use_calendar::*;
