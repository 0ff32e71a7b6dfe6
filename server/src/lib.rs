//! Tally Server - file-persisted inventory synchronization.
//!
//! HTTP boundary over the tally-engine reconciliation and stock ledger
//! logic: per-collection fetch/create endpoints, a batch-sync merge for
//! component-change records, a placeholder login contract, and a health
//! probe. Collections persist as one JSON file each.

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use axum::Router;
use state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router with tracing and CORS layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
