use leptos::prelude::*;

use crate::features::users::{use_directory, UserCard, UserModal, UserTable, UsersToolbar, ViewMode};

#[component]
pub fn Users() -> impl IntoView {
    let users = use_directory();
    let show_modal = RwSignal::new(false);

    view! {
        <div class="users-page">
            <header class="page-header">
                <div>
                    <h1>"Users"</h1>
                    <p class="subtitle">"Manage your team members and user accounts"</p>
                </div>
                <button class="btn-primary" on:click=move |_| show_modal.set(true)>"+ Add User"</button>
            </header>

            <UsersToolbar />

            {move || {
                let visible = users.visible();
                if visible.is_empty() {
                    return view! { <p class="empty">"No users match your search."</p> }.into_any();
                }
                match users.mode.get() {
                    ViewMode::Grid => view! {
                        <div class="user-grid">
                            {visible.into_iter().map(|user| view! { <UserCard user=user /> }).collect_view()}
                        </div>
                    }
                    .into_any(),
                    ViewMode::List => view! { <UserTable users=visible /> }.into_any(),
                }
            }}

            <p class="muted">{move || format!("{} users in total", users.total())}</p>

            <UserModal open=show_modal />
        </div>
    }
}
