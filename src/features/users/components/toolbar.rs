use leptos::prelude::*;

use crate::core::StatusFilter;
use crate::features::users::hooks::{expect_directory, ViewMode};

#[component]
pub fn UsersToolbar() -> impl IntoView {
    let users = expect_directory();

    view! {
        <div class="toolbar">
            <input
                class="search-input"
                type="text"
                placeholder="Search users..."
                on:input=move |ev| users.search.set(event_target_value(&ev))
                prop:value=move || users.search.get()
            />
            <select
                on:change=move |ev| {
                    if let Ok(filter) = event_target_value(&ev).parse() {
                        users.filter.set(filter);
                    }
                }
                prop:value=move || users.filter.get().as_str()
            >
                {StatusFilter::all()
                    .into_iter()
                    .map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
                    .collect_view()}
            </select>
            <div class="segmented">
                {ViewMode::all()
                    .into_iter()
                    .map(|mode| view! {
                        <button
                            class:active=move || users.mode.get() == mode
                            on:click=move |_| users.mode.set(mode)
                        >
                            {mode.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
