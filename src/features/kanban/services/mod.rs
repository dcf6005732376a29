pub mod drag_data;
pub mod task_form;

pub use drag_data::*;
pub use task_form::*;
