use admin_board::core::models::Priority;
use admin_board::core::seed::{
    demo_dashboard, demo_events, demo_products, demo_users, empty_board, seed_board,
    seed_dashboard, seed_events, seed_products, seed_users, seeded_store, store_from_json,
    try_store_from_json, SeedError,
};
use admin_board::core::BoardError;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

const STYLES: &str = include_str!("../styles.css");

#[test]
fn seed_has_four_columns_in_display_order() {
    let board = seed_board().unwrap();
    let ids: Vec<&str> = board.columns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["todo", "progress", "review", "done"]);

    let empty: Vec<String> = empty_board().columns.into_iter().map(|c| c.id).collect();
    assert_eq!(empty, ids);
}

#[test]
fn seed_tasks_are_distributed_as_expected() {
    let store = seeded_store();
    assert_eq!(store.task_count(), 6);
    assert_eq!(store.column("todo").unwrap().task_ids(), vec!["1", "2"]);
    assert_eq!(store.column("progress").unwrap().task_ids(), vec!["3", "4"]);
    assert_eq!(store.column("review").unwrap().task_ids(), vec!["5"]);
    assert_eq!(store.column("done").unwrap().task_ids(), vec!["6"]);
}

#[test]
fn seed_task_fields_are_parsed() {
    let store = seeded_store();
    let (task, column) = store.find_task("3").unwrap();

    assert_eq!(column, "progress");
    assert_eq!(task.title, "API integration");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.assignee, "Mike Johnson");
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 1, 30));
    assert_eq!(task.tags, vec!["Backend", "API"]);
    assert_eq!(task.due_label().as_deref(), Some("Jan 30, 2024"));
}

#[test]
fn embedded_seed_builds_a_valid_store() {
    assert!(admin_board::core::seed::try_seeded_store().is_ok());
}

#[test]
fn malformed_seed_falls_back_to_empty_board() {
    let json = "{ \"columns\": [ { \"id\": \"todo\" ";
    assert!(matches!(try_store_from_json(json), Err(SeedError::Parse(_))));

    let store = store_from_json(json);
    assert_eq!(store.task_count(), 0);
    assert_eq!(store.column_ids(), vec!["todo", "progress", "review", "done"]);
}

#[test]
fn seed_with_duplicate_task_falls_back_to_empty_board() {
    let json = r#"{
        "columns": [
            { "id": "todo", "title": "To Do", "tasks": [ { "id": "1", "title": "One" } ] },
            { "id": "done", "title": "Done", "tasks": [ { "id": "1", "title": "Again" } ] }
        ]
    }"#;
    assert!(matches!(
        try_store_from_json(json),
        Err(SeedError::Invalid(BoardError::DuplicateTask(id))) if id == "1"
    ));

    let store = store_from_json(json);
    assert_eq!(store.task_count(), 0);
    assert_eq!(store.column_ids().len(), 4);
}

#[test]
fn well_formed_json_is_used_as_is() {
    let json = r#"{ "columns": [ { "id": "only", "title": "Only" } ] }"#;
    let store = store_from_json(json);
    assert_eq!(store.column_ids(), vec!["only"]);
}

#[test]
fn every_column_accent_has_a_tint() {
    let accents: Vec<String> = seed_board()
        .unwrap()
        .columns
        .into_iter()
        .chain(empty_board().columns)
        .filter_map(|c| c.accent)
        .collect();
    assert_eq!(accents.len(), 8);

    for accent in accents {
        let rule = format!(".kanban-column--{} {{", accent);
        assert!(STYLES.contains(&rule), "styles.css has no rule for `{}`", rule);
    }
}

#[test]
fn demo_data_for_other_views_parses() {
    assert_eq!(seed_events().unwrap().len(), 4);
    assert_eq!(seed_products().unwrap().len(), 12);
    assert_eq!(seed_users().unwrap().len(), 6);

    let dashboard = seed_dashboard().unwrap();
    assert_eq!(dashboard.stats.len(), 4);
    assert_eq!(dashboard.monthly.len(), 7);
    assert_eq!(dashboard.traffic.len(), 3);

    assert_eq!(demo_events().len(), 4);
    assert_eq!(demo_products().len(), 12);
    assert_eq!(demo_users().len(), 6);
    assert_eq!(demo_dashboard(), dashboard);
}
