use leptos::prelude::*;

use crate::features::analytics::{use_analytics, AnalyticsControls, ProductTable, SummaryCards};

#[component]
pub fn Analytics() -> impl IntoView {
    let analytics = use_analytics();

    view! {
        <div class="analytics-page">
            <header class="page-header">
                <div>
                    <h1>"Analytics"</h1>
                    <p class="subtitle">"Detailed performance metrics and insights"</p>
                </div>
                <button class="btn-primary" on:click=move |_| analytics.export()>"Export"</button>
            </header>

            <AnalyticsControls />
            <SummaryCards />
            <ProductTable />
        </div>
    }
}
