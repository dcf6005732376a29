use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use super::dashboard::DashboardData;
use super::error::BoardError;
use super::models::{Board, CalendarEvent, Column, ProductRecord, User};
use super::store::BoardStore;

const SEED_JSON: &str = include_str!("../../assets/seed_board.json");
const EVENTS_JSON: &str = include_str!("../../assets/events.json");
const PRODUCTS_JSON: &str = include_str!("../../assets/products.json");
const USERS_JSON: &str = include_str!("../../assets/users.json");
const DASHBOARD_JSON: &str = include_str!("../../assets/dashboard.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed board is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed board rejected: {0}")]
    Invalid(#[from] BoardError),
}

/// Demo board shown on first load.
pub fn seed_board() -> Result<Board, serde_json::Error> {
    serde_json::from_str(SEED_JSON)
}

/// Same columns as the seed, without any tasks.
pub fn empty_board() -> Board {
    Board::new(vec![
        Column::new("todo", "To Do").with_accent("neutral"),
        Column::new("progress", "In Progress").with_accent("primary"),
        Column::new("review", "Review").with_accent("warning"),
        Column::new("done", "Done").with_accent("accent"),
    ])
}

pub fn try_store_from_json(json: &str) -> Result<BoardStore, SeedError> {
    let board: Board = serde_json::from_str(json)?;
    Ok(BoardStore::new(board)?)
}

/// Store over the board in `json`, or over [`empty_board`] when it cannot be used.
pub fn store_from_json(json: &str) -> BoardStore {
    try_store_from_json(json).unwrap_or_else(|e| {
        error!("Failed to load seed board: {}", e);
        BoardStore::new(empty_board()).unwrap_or_default()
    })
}

pub fn try_seeded_store() -> Result<BoardStore, SeedError> {
    try_store_from_json(SEED_JSON)
}

pub fn seeded_store() -> BoardStore {
    store_from_json(SEED_JSON)
}

fn load_or_default<T: DeserializeOwned + Default>(what: &str, json: &str) -> T {
    serde_json::from_str(json).unwrap_or_else(|e| {
        error!("Failed to load demo {}: {}", what, e);
        T::default()
    })
}

pub fn seed_events() -> Result<Vec<CalendarEvent>, serde_json::Error> {
    serde_json::from_str(EVENTS_JSON)
}

pub fn seed_products() -> Result<Vec<ProductRecord>, serde_json::Error> {
    serde_json::from_str(PRODUCTS_JSON)
}

pub fn seed_users() -> Result<Vec<User>, serde_json::Error> {
    serde_json::from_str(USERS_JSON)
}

pub fn seed_dashboard() -> Result<DashboardData, serde_json::Error> {
    serde_json::from_str(DASHBOARD_JSON)
}

/// Demo events, or none if the embedded data is broken.
pub fn demo_events() -> Vec<CalendarEvent> {
    load_or_default("events", EVENTS_JSON)
}

pub fn demo_products() -> Vec<ProductRecord> {
    load_or_default("products", PRODUCTS_JSON)
}

pub fn demo_users() -> Vec<User> {
    load_or_default("users", USERS_JSON)
}

pub fn demo_dashboard() -> DashboardData {
    load_or_default("dashboard", DASHBOARD_JSON)
}
