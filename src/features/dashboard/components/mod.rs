pub mod bar_chart;
pub mod stat_card;
pub mod traffic_chart;

pub use bar_chart::BarChart;
pub use stat_card::StatCardView;
pub use traffic_chart::TrafficChart;
