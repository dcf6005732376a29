use tracing::debug;

pub const TASK_ID_MIME: &str = "text/plain";

/// The part of the browser's drag payload the board uses.
pub trait DragPayload {
    fn put(&self, mime: &str, value: &str) -> Result<(), String>;
    fn take(&self, mime: &str) -> Option<String>;
    fn allow_move(&self);
}

impl DragPayload for web_sys::DataTransfer {
    fn put(&self, mime: &str, value: &str) -> Result<(), String> {
        self.set_data(mime, value).map_err(|e| format!("{:?}", e))
    }

    fn take(&self, mime: &str) -> Option<String> {
        self.get_data(mime).ok()
    }

    fn allow_move(&self) {
        self.set_effect_allowed("move");
    }
}

/// Stashes the dragged task id. Returns `false` when the browser refused it;
/// the drop handler then falls back to the active drag.
pub fn write_task_id(payload: &impl DragPayload, task_id: &str) -> bool {
    payload.allow_move();
    match payload.put(TASK_ID_MIME, task_id) {
        Ok(()) => true,
        Err(e) => {
            debug!(task_id, "drag payload rejected task id: {}", e);
            false
        }
    }
}

pub fn read_task_id(payload: &impl DragPayload) -> Option<String> {
    payload.take(TASK_ID_MIME).filter(|id| !id.is_empty())
}
