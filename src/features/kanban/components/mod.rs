pub mod column;
pub mod drag_overlay;
pub mod header;
pub mod task_card;
pub mod task_modal;

pub use column::KanbanColumn;
pub use drag_overlay::DragOverlay;
pub use header::KanbanHeader;
pub use task_card::TaskCard;
pub use task_modal::TaskModal;
