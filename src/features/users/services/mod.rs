pub mod confirm;
pub mod user_form;

pub use confirm::*;
pub use user_form::*;
