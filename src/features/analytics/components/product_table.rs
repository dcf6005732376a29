use leptos::prelude::*;

use crate::core::analytics::group_thousands;
use crate::core::models::ProductStatus;
use crate::core::{SortDirection, SortField};
use crate::features::analytics::hooks::expect_analytics;

#[component]
fn SortHeader(field: SortField) -> impl IntoView {
    let analytics = expect_analytics();

    let indicator = move || {
        analytics.query.with(|q| match (q.sort == field, q.direction) {
            (false, _) => "↕",
            (true, SortDirection::Asc) => "▲",
            (true, SortDirection::Desc) => "▼",
        })
    };

    view! {
        <th>
            <button class="sort-button" on:click=move |_| analytics.toggle_sort(field)>
                {field.label()}
                <span class="sort-indicator">{indicator}</span>
            </button>
        </th>
    }
}

#[component]
pub fn ProductTable() -> impl IntoView {
    let analytics = expect_analytics();
    let page = Memo::new(move |_| analytics.page());

    view! {
        <div class="table-card">
            <table class="data-table">
                <thead>
                    <tr>
                        {SortField::all()
                            .into_iter()
                            .map(|field| view! { <SortHeader field=field /> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        page.get()
                            .rows
                            .into_iter()
                            .map(|row| {
                                let growth_class = if row.growth < 0.0 { "growth down" } else { "growth up" };
                                let status_class = match row.status {
                                    ProductStatus::Active => "status-badge status-active",
                                    ProductStatus::Inactive => "status-badge status-inactive",
                                };
                                view! {
                                    <tr>
                                        <td class="product-name">{row.name.clone()}</td>
                                        <td>{row.category.clone()}</td>
                                        <td>{group_thousands(row.sales)}</td>
                                        <td>{format!("${}", group_thousands(row.revenue))}</td>
                                        <td class=growth_class>{format!("{:+.1}%", row.growth)}</td>
                                        <td><span class=status_class>{row.status.label()}</span></td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <div class="pagination">
                <span>
                    {move || page.with(|p| format!(
                        "Showing {} to {} of {} results",
                        p.first_index, p.last_index, p.total_matches
                    ))}
                </span>
                <div class="pagination-buttons">
                    <button
                        class="btn-secondary"
                        disabled=move || page.with(|p| !p.has_prev())
                        on:click=move |_| analytics.prev_page()
                    >
                        "Previous"
                    </button>
                    <span class="page-indicator">
                        {move || page.with(|p| format!("Page {} of {}", p.page, p.total_pages.max(1)))}
                    </span>
                    <button
                        class="btn-secondary"
                        disabled=move || page.with(|p| !p.has_next())
                        on:click=move |_| analytics.next_page()
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}
