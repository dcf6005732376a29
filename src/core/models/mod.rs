pub mod board;
pub mod column;
pub mod event;
pub mod product;
pub mod task;
pub mod user;

pub use board::Board;
pub use column::Column;
pub use event::{CalendarEvent, EventDraft, EventKind};
pub use product::{ProductRecord, ProductStatus};
pub use task::{Priority, Task, TaskDraft};
pub use user::{User, UserDraft, UserStatus};
