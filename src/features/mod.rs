pub mod analytics;
pub mod calendar;
pub mod dashboard;
pub mod kanban;
pub mod theme;
pub mod users;
