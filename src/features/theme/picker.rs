use leptos::prelude::*;

use super::context::use_theme;
use crate::core::services::Theme;

#[component]
pub fn ThemePicker() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <div class="theme-picker">
            {Theme::all()
                .into_iter()
                .map(|theme| view! {
                    <button
                        class=format!("theme-swatch theme-swatch--{}", theme.as_str())
                        class:selected=move || ctx.theme.get() == theme
                        title=theme.label()
                        on:click=move |_| ctx.set(theme)
                    >
                        {theme.label()}
                    </button>
                })
                .collect_view()}
        </div>
    }
}
