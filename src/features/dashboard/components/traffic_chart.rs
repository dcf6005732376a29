use leptos::prelude::*;

use crate::core::dashboard::{conic_gradient, share_percentages, TrafficShare};

#[component]
pub fn TrafficChart(shares: Vec<TrafficShare>) -> impl IntoView {
    let gradient = conic_gradient(&shares);
    let percents = share_percentages(&shares);

    view! {
        <section class="chart-card">
            <h3>"Traffic Sources"</h3>
            <div class="donut" style=format!("background: {}", gradient)></div>
            <ul class="legend">
                {shares
                    .into_iter()
                    .zip(percents)
                    .map(|(share, pct)| view! {
                        <li>
                            <span class="legend-swatch" style=format!("background: {}", share.color)></span>
                            {format!("{} {}%", share.name, pct)}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
