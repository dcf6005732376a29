use leptos::prelude::*;

use crate::features::analytics::hooks::expect_analytics;

const ALL_CATEGORIES: &str = "all";

#[component]
pub fn AnalyticsControls() -> impl IntoView {
    let analytics = expect_analytics();

    let on_category = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let category = (value != ALL_CATEGORIES).then_some(value);
        analytics.set_category(category);
    };

    view! {
        <div class="toolbar">
            <input
                class="search-input"
                type="text"
                placeholder="Search products..."
                on:input=move |ev| analytics.set_search(event_target_value(&ev))
                prop:value=move || analytics.query.with(|q| q.search.clone())
            />
            <select
                on:change=on_category
                prop:value=move || {
                    analytics
                        .query
                        .with(|q| q.category.clone())
                        .unwrap_or_else(|| ALL_CATEGORIES.to_string())
                }
            >
                <option value=ALL_CATEGORIES>"All Categories"</option>
                {analytics
                    .categories()
                    .into_iter()
                    .map(|c| { let v = c.clone(); view! { <option value=v>{c}</option> } })
                    .collect_view()}
            </select>
        </div>
    }
}
