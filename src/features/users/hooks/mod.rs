pub mod use_directory;

pub use use_directory::*;
