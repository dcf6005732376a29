use leptos::prelude::*;

use crate::core::dashboard::{StatCard, Trend};

#[component]
pub fn StatCardView(stat: StatCard) -> impl IntoView {
    let (trend_class, arrow) = match stat.trend() {
        Trend::Up => ("trend up", "↗"),
        Trend::Down => ("trend down", "↘"),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card-top">
                <span class=format!("stat-icon accent-{}", stat.accent)></span>
                <span class=trend_class>{arrow} {stat.change_label()}</span>
            </div>
            <p class="stat-title">{stat.title.clone()}</p>
            <p class="stat-value">{stat.value.clone()}</p>
        </div>
    }
}
