use admin_board::core::analytics::{categories, export_csv, summarize};
use admin_board::core::models::{ProductRecord, ProductStatus};
use admin_board::core::seed::seed_products;
use admin_board::core::{SortDirection, SortField, TableQuery};
use pretty_assertions::assert_eq;

fn products() -> Vec<ProductRecord> {
    seed_products().unwrap()
}

fn names(rows: &[ProductRecord]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn default_query_sorts_by_name_and_pages_by_ten() {
    let page = TableQuery::default().apply(&products());

    assert_eq!(page.total_matches, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.rows[0].name, "Product A");
    assert_eq!((page.first_index, page.last_index), (1, 10));
    assert!(page.has_next());
    assert!(!page.has_prev());
}

#[test]
fn second_page_holds_the_rest() {
    let mut query = TableQuery::default();
    query.next_page(2);
    let page = query.apply(&products());

    assert_eq!(names(&page.rows), vec!["Product K", "Product L"]);
    assert_eq!((page.first_index, page.last_index), (11, 12));
    assert!(!page.has_next());

    query.next_page(2);
    assert_eq!(query.page, 2);
}

#[test]
fn search_matches_name_or_category_case_insensitively() {
    let mut query = TableQuery::default();
    query.set_search("ELECTRO");
    let page = query.apply(&products());
    assert_eq!(names(&page.rows), vec!["Product A", "Product D", "Product G", "Product L"]);

    query.set_search("product c");
    assert_eq!(names(&query.apply(&products()).rows), vec!["Product C"]);
}

#[test]
fn category_filter_and_search_combine() {
    let mut query = TableQuery::default();
    query.set_category(Some("Books".into()));
    assert_eq!(names(&query.apply(&products()).rows), vec!["Product E", "Product J"]);

    query.set_search("j");
    assert_eq!(names(&query.apply(&products()).rows), vec!["Product J"]);
}

#[test]
fn filter_change_returns_to_first_page() {
    let mut query = TableQuery::default();
    query.next_page(2);
    query.set_category(Some("Home".into()));
    assert_eq!(query.page, 1);
}

#[test]
fn numeric_sort_and_toggle() {
    let mut query = TableQuery::default();
    query.toggle_sort(SortField::Growth);
    let rows = query.filtered(&products());
    assert_eq!(rows.first().map(|r| r.growth), Some(-8.2));
    assert_eq!(rows.last().map(|r| r.growth), Some(22.1));

    query.toggle_sort(SortField::Growth);
    assert_eq!(query.direction, SortDirection::Desc);
    let rows = query.filtered(&products());
    assert_eq!(rows[0].name, "Product I");

    query.toggle_sort(SortField::Revenue);
    let rows = query.filtered(&products());
    assert_eq!(rows[0].revenue, 13350);
}

#[test]
fn empty_result_has_no_pages() {
    let mut query = TableQuery::default();
    query.set_search("nothing like this");
    let page = query.apply(&products());

    assert!(page.rows.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.page, 1);
    assert_eq!((page.first_index, page.last_index), (0, 0));
    assert!(!page.has_next());
}

#[test]
fn page_past_the_end_is_clamped() {
    let mut query = TableQuery::default();
    query.page = 9;
    let page = query.apply(&products());
    assert_eq!(page.page, 2);
    assert_eq!(page.rows.len(), 2);
}

#[test]
fn categories_in_first_seen_order() {
    assert_eq!(
        categories(&products()),
        vec!["Electronics", "Clothing", "Home", "Books", "Sports"]
    );
}

#[test]
fn summary_covers_filtered_rows() {
    let mut query = TableQuery::default();
    query.set_category(Some("Sports".into()));
    let summary = summarize(&query.filtered(&products()));

    assert_eq!(summary.products, 2);
    assert_eq!(summary.sales, 723 + 1123);
    assert_eq!(summary.revenue, 43380 + 67380);
    let avg = summary.average_growth.unwrap();
    assert!((avg - 2.95).abs() < 1e-9);
}

#[test]
fn csv_export_has_header_and_one_line_per_row() {
    let mut query = TableQuery::default();
    query.set_category(Some("Books".into()));
    let csv = export_csv(&query.filtered(&products())).unwrap();

    assert_eq!(
        csv,
        "Name,Category,Sales,Revenue,Growth,Status\n\
         Product E,Books,1800,54000,15.3,Active\n\
         Product J,Books,445,13350,-8.2,Active\n"
    );
}

#[test]
fn csv_export_quotes_commas() {
    let row = ProductRecord {
        id: 1,
        name: "Widget, large".into(),
        category: "Home".into(),
        sales: 1,
        revenue: 2,
        growth: 0.5,
        status: ProductStatus::Inactive,
    };
    let csv = export_csv(&[row]).unwrap();
    assert!(csv.ends_with("\"Widget, large\",Home,1,2,0.5,Inactive\n"));

    assert_eq!(export_csv(&[]).unwrap(), "Name,Category,Sales,Revenue,Growth,Status\n");
}
