pub mod analytics;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod drag;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;

pub use analytics::{ExportError, SortDirection, SortField, TablePage, TableQuery};
pub use calendar::{CalendarView, Schedule};
pub use directory::{DirectoryError, StatusFilter, UserDirectory};
pub use drag::{DragController, DropOutcome};
pub use error::BoardError;
pub use store::{BoardStore, MoveOutcome, SequentialGenerator, TaskIdGenerator, UuidGenerator};
