pub mod use_analytics;

pub use use_analytics::*;
