use std::cmp::Ordering;
use std::collections::HashSet;
use std::string::FromUtf8Error;

use serde::Serialize;
use thiserror::Error;

use super::models::ProductRecord;

pub const PAGE_SIZE: usize = 10;
pub const CSV_FILE_NAME: &str = "analytics-data.csv";
const CSV_HEADERS: [&str; 6] = ["Name", "Category", "Sales", "Revenue", "Growth", "Status"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush csv output: {0}")]
    Flush(String),

    #[error("csv output is not utf-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Name,
    Category,
    Sales,
    Revenue,
    Growth,
    Status,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Product",
            SortField::Category => "Category",
            SortField::Sales => "Sales",
            SortField::Revenue => "Revenue",
            SortField::Growth => "Growth",
            SortField::Status => "Status",
        }
    }

    pub fn all() -> Vec<SortField> {
        vec![
            SortField::Name,
            SortField::Category,
            SortField::Sales,
            SortField::Revenue,
            SortField::Growth,
            SortField::Status,
        ]
    }

    fn compare(&self, a: &ProductRecord, b: &ProductRecord) -> Ordering {
        match self {
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Category => compare_text(&a.category, &b.category),
            SortField::Sales => a.sales.cmp(&b.sales),
            SortField::Revenue => a.revenue.cmp(&b.revenue),
            SortField::Growth => a.growth.total_cmp(&b.growth),
            SortField::Status => a.status.label().cmp(b.status.label()),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Search, category filter, sort and page for the analytics table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    /// `None` shows every category.
    pub category: Option<String>,
    pub sort: SortField,
    pub direction: SortDirection,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            sort: SortField::Name,
            direction: SortDirection::Asc,
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl TableQuery {
    /// Clicking the active column flips direction; any other column sorts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort == field {
            self.direction = self.direction.flipped();
        } else {
            self.sort = field;
            self.direction = SortDirection::Asc;
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.page = 1;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    fn matches(&self, record: &ProductRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || record.name.to_lowercase().contains(&needle)
            || record.category.to_lowercase().contains(&needle);
        let matches_category = self
            .category
            .as_ref()
            .map_or(true, |category| &record.category == category);
        matches_search && matches_category
    }

    /// Every matching record in sort order. Exports use this, not the page.
    pub fn filtered(&self, records: &[ProductRecord]) -> Vec<ProductRecord> {
        let mut rows: Vec<ProductRecord> =
            records.iter().filter(|r| self.matches(r)).cloned().collect();
        rows.sort_by(|a, b| {
            let ord = self.sort.compare(a, b);
            match self.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        rows
    }

    pub fn apply(&self, records: &[ProductRecord]) -> TablePage {
        let filtered = self.filtered(records);
        let page_size = self.page_size.max(1);
        let total_matches = filtered.len();
        let total_pages = total_matches.div_ceil(page_size);
        let page = self.page.clamp(1, total_pages.max(1));

        let start = (page - 1) * page_size;
        let rows: Vec<ProductRecord> = filtered.into_iter().skip(start).take(page_size).collect();
        let (first_index, last_index) = if rows.is_empty() {
            (0, 0)
        } else {
            (start + 1, start + rows.len())
        };

        TablePage {
            rows,
            page,
            total_pages,
            total_matches,
            first_index,
            last_index,
        }
    }
}

/// One page of the analytics table plus the "Showing X to Y of Z" figures.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<ProductRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub first_index: usize,
    pub last_index: usize,
}

impl TablePage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Totals over the filtered rows shown above the table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub products: usize,
    pub sales: u64,
    pub revenue: u64,
    /// `None` when nothing matches.
    pub average_growth: Option<f64>,
}

pub fn summarize(rows: &[ProductRecord]) -> TableSummary {
    let average_growth = if rows.is_empty() {
        None
    } else {
        Some(rows.iter().map(|r| r.growth).sum::<f64>() / rows.len() as f64)
    };

    TableSummary {
        products: rows.len(),
        sales: rows.iter().map(|r| r.sales).sum(),
        revenue: rows.iter().map(|r| r.revenue).sum(),
        average_growth,
    }
}

/// Distinct categories in first-seen order.
pub fn categories(records: &[ProductRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.category.as_str()))
        .map(|r| r.category.clone())
        .collect()
}

/// `1234567` renders as `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    category: &'a str,
    sales: u64,
    revenue: u64,
    growth: f64,
    status: &'a str,
}

/// Header row plus one line per record. Fields containing commas are quoted.
pub fn export_csv(rows: &[ProductRecord]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.serialize(CsvRow {
            name: &row.name,
            category: &row.category,
            sales: row.sales,
            revenue: row.revenue,
            growth: row.growth,
            status: row.status.label(),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(126000), "126,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn toggling_a_new_field_resets_direction() {
        let mut query = TableQuery::default();
        query.toggle_sort(SortField::Name);
        assert_eq!(query.direction, SortDirection::Desc);

        query.toggle_sort(SortField::Revenue);
        assert_eq!(query.sort, SortField::Revenue);
        assert_eq!(query.direction, SortDirection::Asc);
    }

    #[test]
    fn empty_summary_has_no_average() {
        let summary = summarize(&[]);
        assert_eq!(summary.products, 0);
        assert_eq!(summary.average_growth, None);
    }
}
