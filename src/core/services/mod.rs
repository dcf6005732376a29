pub mod preferences;
pub mod theme;

pub use preferences::*;
pub use theme::*;
