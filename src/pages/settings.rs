use leptos::prelude::*;

use crate::features::theme::{use_theme, ThemePicker};

#[component]
pub fn Settings() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <div class="settings-page">
            <header class="settings-header">
                <h1>"Appearance"</h1>
                <p class="subtitle">"Pick a color theme. It is remembered on this device."</p>
            </header>
            <section class="settings-section">
                <h3>"Theme"</h3>
                <ThemePicker />
                <p class="theme-mode">
                    {move || if ctx.is_dark() { "Dark mode" } else { "Light mode" }}
                </p>
            </section>
        </div>
    }
}
