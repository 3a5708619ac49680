//! Application state shared across all request handlers.
//!
//! The `AppState` struct holds the shared resources every handler needs. It
//! is initialized once during startup and cloned for each request through
//! Axum's state extraction; all fields are cheap to clone.

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Minimum accepted payment amount, from configuration.
    pub entry_fee_minimum: Decimal,
}

impl AppState {
    pub fn new(db: DatabaseConnection, entry_fee_minimum: Decimal) -> Self {
        Self {
            db,
            entry_fee_minimum,
        }
    }
}
