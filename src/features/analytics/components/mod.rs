pub mod controls;
pub mod product_table;
pub mod summary;

pub use controls::AnalyticsControls;
pub use product_table::ProductTable;
pub use summary::SummaryCards;
