use leptos::prelude::*;

use super::confirm_and_delete;
use crate::core::models::User;
use crate::features::users::hooks::expect_directory;

#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let users = expect_directory();
    let id = user.id;

    view! {
        <div class="user-card">
            <div class="user-card-header">
                <span class="avatar">{user.initials()}</span>
                <div>
                    <h3>{user.name.clone()}</h3>
                    <p class="user-email">{user.email.clone()}</p>
                </div>
            </div>
            <div class="user-contact">
                <p>{user.phone.clone()}</p>
                <p>{user.location.clone()}</p>
            </div>
            <div class="user-badges">
                <span class=user.role_class()>{user.role.clone()}</span>
                <span class=format!("status-badge status-{}", user.status.as_str())>
                    {user.status.as_str()}
                </span>
            </div>
            <div class="user-card-footer">
                <span class="user-activity">{format!("Last active: {}", user.last_activity)}</span>
                <button class="icon-button danger" title="Delete user" on:click=move |_| confirm_and_delete(users, id)>
                    "🗑"
                </button>
            </div>
        </div>
    }
}
