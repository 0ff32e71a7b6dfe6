//! Route modules, one per collection plus auth and health.

pub mod auth;
pub mod changes;
pub mod health;
pub mod inventory;
pub mod movements;
pub mod users;

use crate::state::AppState;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tally_engine::Syncable;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(inventory::routes())
        .merge(movements::routes())
        .merge(users::routes())
        .merge(changes::routes())
        .merge(auth::routes())
}

/// Query parameters for incremental fetches.
#[derive(Debug, Deserialize)]
pub struct SinceQuery {
    /// Return only records strictly newer than this timestamp
    pub since: Option<DateTime<Utc>>,
}

/// Keep records whose effective timestamp is strictly later than
/// `since`; no `since` returns everything.
pub(crate) fn newer_than<T: Syncable>(records: Vec<T>, since: Option<DateTime<Utc>>) -> Vec<T> {
    match since {
        None => records,
        Some(cutoff) => records
            .into_iter()
            .filter(|r| r.effective_timestamp().is_some_and(|t| t > cutoff))
            .collect(),
    }
}
