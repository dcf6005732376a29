use tracing::debug;

/// Blocking browser confirmation. A failed dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    let Some(window) = web_sys::window() else {
        debug!("no window; confirmation declined");
        return false;
    };
    window.confirm_with_message(message).unwrap_or_else(|e| {
        debug!("confirm dialog failed: {:?}", e);
        false
    })
}
