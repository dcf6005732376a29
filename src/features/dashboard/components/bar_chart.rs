use leptos::prelude::*;

use crate::core::analytics::group_thousands;
use crate::core::dashboard::relative_heights;

/// Vertical bars scaled to the largest value.
#[component]
pub fn BarChart(
    title: &'static str,
    labels: Vec<String>,
    values: Vec<u32>,
    /// Modifier for the bar color, e.g. `revenue`.
    tone: &'static str,
) -> impl IntoView {
    let heights = relative_heights(&values);

    view! {
        <section class="chart-card">
            <h3>{title}</h3>
            <div class=format!("bar-chart bar-chart--{}", tone)>
                {labels
                    .into_iter()
                    .zip(values)
                    .zip(heights)
                    .map(|((label, value), height)| view! {
                        <div class="bar-column" title=group_thousands(u64::from(value))>
                            <div class="bar-track">
                                <div class="bar" style=format!("height: {:.1}%", height)></div>
                            </div>
                            <span class="bar-label">{label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
