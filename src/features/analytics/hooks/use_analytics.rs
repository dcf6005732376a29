use leptos::prelude::*;
use tracing::{info, warn};

use crate::core::analytics::{categories, export_csv, summarize, TableSummary, CSV_FILE_NAME};
use crate::core::models::ProductRecord;
use crate::core::seed::demo_products;
use crate::core::{SortField, TablePage, TableQuery};
use crate::features::analytics::services::download_text;

/// Product rows plus the table query the controls edit.
#[derive(Clone, Copy)]
pub struct AnalyticsHandle {
    records: RwSignal<Vec<ProductRecord>>,
    pub query: RwSignal<TableQuery>,
}

impl AnalyticsHandle {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self {
            records: RwSignal::new(records),
            query: RwSignal::new(TableQuery::default()),
        }
    }

    pub fn page(&self) -> TablePage {
        self.query
            .with(|q| self.records.with(|records| q.apply(records)))
    }

    /// Totals over every filtered row, not only the visible page.
    pub fn summary(&self) -> TableSummary {
        summarize(&self.filtered())
    }

    pub fn categories(&self) -> Vec<String> {
        self.records.with(|records| categories(records))
    }

    pub fn toggle_sort(&self, field: SortField) {
        self.query.update(|q| q.toggle_sort(field));
    }

    pub fn set_search(&self, search: String) {
        self.query.update(|q| q.set_search(search));
    }

    pub fn set_category(&self, category: Option<String>) {
        self.query.update(|q| q.set_category(category));
    }

    pub fn next_page(&self) {
        let total_pages = self.page().total_pages;
        self.query.update(|q| q.next_page(total_pages));
    }

    pub fn prev_page(&self) {
        self.query.update(TableQuery::prev_page);
    }

    /// Downloads the filtered rows as `analytics-data.csv`.
    pub fn export(&self) {
        let rows = self.filtered();
        let csv = match export_csv(&rows) {
            Ok(csv) => csv,
            Err(e) => {
                warn!("Failed to export analytics: {}", e);
                return;
            }
        };

        match download_text(CSV_FILE_NAME, "text/csv", &csv) {
            Ok(()) => info!(rows = rows.len(), "analytics exported"),
            Err(e) => warn!("Failed to download analytics export: {}", e),
        }
    }

    fn filtered(&self) -> Vec<ProductRecord> {
        self.query
            .with(|q| self.records.with(|records| q.filtered(records)))
    }
}

pub fn use_analytics() -> AnalyticsHandle {
    let handle = AnalyticsHandle::new(demo_products());
    provide_context(handle);
    handle
}

pub fn expect_analytics() -> AnalyticsHandle {
    use_context::<AnalyticsHandle>().expect("AnalyticsHandle context; call use_analytics() in a parent")
}
