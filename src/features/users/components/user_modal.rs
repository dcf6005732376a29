use leptos::ev;
use leptos::prelude::*;
use tracing::{info, warn};

use crate::core::models::user::ROLES;
use crate::core::models::UserStatus;
use crate::features::users::hooks::expect_directory;
use crate::features::users::services::UserForm;

#[component]
pub fn UserModal(open: RwSignal<bool>) -> impl IntoView {
    let users = expect_directory();

    let form = RwSignal::new(UserForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let close = move || {
        open.set(false);
        set_error.set(None);
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let draft = match form.with_untracked(UserForm::validate) {
            Ok(draft) => draft,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        match users.add_user(draft) {
            Ok(user) => {
                info!(user_id = user.id, "user created");
                form.set(UserForm::default());
                close();
            }
            Err(e) => {
                warn!("Failed to add user: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="task-modal">
                    <div class="modal-header">
                        <h3>"Add New User"</h3>
                        <button type="button" class="modal-close" on:click=move |_| close()>"×"</button>
                    </div>
                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label>"Full Name *"</label>
                            <input
                                type="text"
                                required
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.name.clone())
                            />
                        </div>
                        <div class="form-group">
                            <label>"Email *"</label>
                            <input
                                type="email"
                                required
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.email.clone())
                            />
                        </div>
                        <div class="form-group">
                            <label>"Phone"</label>
                            <input
                                type="tel"
                                on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.phone.clone())
                            />
                        </div>
                        <div class="form-group">
                            <label>"Location"</label>
                            <input
                                type="text"
                                on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.location.clone())
                            />
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Role"</label>
                                <select
                                    on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.role.clone())
                                >
                                    {ROLES.iter().map(|role| view! { <option value=*role>{*role}</option> }).collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label>"Status"</label>
                                <select
                                    on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.status.clone())
                                >
                                    {UserStatus::all()
                                        .into_iter()
                                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>
                        {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="btn-primary">"Add User"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
