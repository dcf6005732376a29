pub mod analytics;
pub mod calendar;
pub mod dashboard;
pub mod kanban;
pub mod settings;
pub mod users;

pub use analytics::Analytics;
pub use calendar::Calendar;
pub use dashboard::Dashboard;
pub use kanban::Kanban;
pub use settings::Settings;
pub use users::Users;
