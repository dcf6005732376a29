use leptos::prelude::*;

use crate::core::analytics::group_thousands;
use crate::features::analytics::hooks::expect_analytics;

#[component]
pub fn SummaryCards() -> impl IntoView {
    let analytics = expect_analytics();
    let summary = move || analytics.summary();

    view! {
        <div class="summary-grid">
            <div class="summary-card">
                <span class="summary-label">"Total Products"</span>
                <span class="summary-value">{move || summary().products}</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">"Total Sales"</span>
                <span class="summary-value">{move || group_thousands(summary().sales)}</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">"Total Revenue"</span>
                <span class="summary-value">{move || format!("${}", group_thousands(summary().revenue))}</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">"Avg Growth"</span>
                <span class="summary-value">
                    {move || summary().average_growth.map_or("n/a".to_string(), |g| format!("{:.1}%", g))}
                </span>
            </div>
        </div>
    }
}
