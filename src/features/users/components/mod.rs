pub mod toolbar;
pub mod user_card;
pub mod user_modal;
pub mod user_table;

pub use toolbar::UsersToolbar;
pub use user_card::UserCard;
pub use user_modal::UserModal;
pub use user_table::UserTable;

use tracing::{info, warn};

use crate::features::users::hooks::DirectoryHandle;
use crate::features::users::services::confirm;

/// Asks first, then removes the user.
pub(crate) fn confirm_and_delete(users: DirectoryHandle, id: u64) {
    if !confirm("Are you sure you want to delete this user?") {
        return;
    }
    match users.delete_user(id) {
        Ok(user) => info!(user_id = user.id, "user deleted"),
        Err(e) => warn!(user_id = id, "Failed to delete user: {}", e),
    }
}
