pub mod context;
pub mod picker;

pub use context::*;
pub use picker::ThemePicker;
