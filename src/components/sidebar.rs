use leptos::prelude::*;
use leptos_router::components::A;

use crate::features::theme::{use_theme, ThemePicker};

const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Dashboard"),
    ("/analytics", "Analytics"),
    ("/calendar", "Calendar"),
    ("/kanban", "Kanban"),
    ("/users", "Users"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_theme();
    let collapsed = RwSignal::new(false);

    view! {
        <aside class="sidebar" class:collapsed=move || collapsed.get()>
            <div class="sidebar-brand">
                <span class="sidebar-title">"AdminPanel"</span>
                <button
                    class="sidebar-toggle"
                    title="Toggle sidebar"
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>
            <nav class="sidebar-nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| view! { <A href=*href exact=true>{*label}</A> })
                    .collect_view()}
                <A href="/settings">"Appearance"</A>
            </nav>
            <div class="sidebar-footer">
                <Show when=move || !collapsed.get()>
                    <ThemePicker />
                </Show>
                <span class="sidebar-theme">{move || ctx.theme.get().label()}</span>
            </div>
        </aside>
    }
}
