use leptos::prelude::*;

use crate::core::seed::demo_dashboard;
use crate::features::dashboard::{BarChart, StatCardView, TrafficChart};

#[component]
pub fn Dashboard() -> impl IntoView {
    let data = demo_dashboard();
    let months: Vec<String> = data.monthly.iter().map(|p| p.month.clone()).collect();
    let (revenue_labels, growth_labels) = (months.clone(), months.clone());
    let revenue = data.revenue_series();
    let visitors = data.visitor_series();
    let performance = visitors.clone();

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="subtitle">"Welcome back! Here's what's happening."</p>
                </div>
            </header>

            <div class="stat-grid">
                {data.stats.into_iter().map(|stat| view! { <StatCardView stat=stat /> }).collect_view()}
            </div>

            <div class="chart-grid">
                <BarChart title="Revenue Trend" labels=revenue_labels values=revenue tone="revenue" />
                <BarChart title="User Growth" labels=growth_labels values=visitors tone="visitors" />
                <BarChart title="Monthly Performance" labels=months values=performance tone="performance" />
                <TrafficChart shares=data.traffic />
            </div>
        </div>
    }
}
