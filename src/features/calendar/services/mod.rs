pub mod event_form;

pub use event_form::*;
