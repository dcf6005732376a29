use leptos::prelude::*;

use super::confirm_and_delete;
use crate::core::models::User;
use crate::features::users::hooks::expect_directory;

#[component]
pub fn UserTable(users: Vec<User>) -> impl IntoView {
    let directory = expect_directory();

    view! {
        <div class="table-card">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"User"</th>
                        <th>"Contact"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Joined"</th>
                        <th>"Last Activity"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {users
                        .into_iter()
                        .map(|user| {
                            let id = user.id;
                            view! {
                                <tr>
                                    <td>
                                        <span class="avatar avatar--small">{user.initials()}</span>
                                        <span class="user-name">{user.name.clone()}</span>
                                        <span class="user-email">{user.email.clone()}</span>
                                    </td>
                                    <td>
                                        <span>{user.phone.clone()}</span>
                                        <span class="muted">{user.location.clone()}</span>
                                    </td>
                                    <td><span class=user.role_class()>{user.role.clone()}</span></td>
                                    <td>
                                        <span class=format!("status-badge status-{}", user.status.as_str())>
                                            {user.status.as_str()}
                                        </span>
                                    </td>
                                    <td>{user.join_date.format("%Y-%m-%d").to_string()}</td>
                                    <td>{user.last_activity.clone()}</td>
                                    <td>
                                        <button
                                            class="icon-button danger"
                                            title="Delete user"
                                            on:click=move |_| confirm_and_delete(directory, id)
                                        >
                                            "🗑"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
