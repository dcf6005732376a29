use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Sidebar;
use crate::core::config::AppConfig;
use crate::features::theme::provide_theme;
use crate::pages::{Analytics, Calendar, Dashboard, Kanban, Settings, Users};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_theme(config.theme_key.clone());
    provide_context(config);

    view! {
        <Router>
            <div class="app">
                <Sidebar />
                <main class="app-main">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=path!("/") view=Dashboard />
                        <Route path=path!("/analytics") view=Analytics />
                        <Route path=path!("/calendar") view=Calendar />
                        <Route path=path!("/kanban") view=Kanban />
                        <Route path=path!("/users") view=Users />
                        <Route path=path!("/settings") view=Settings />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
