//! Movement endpoints - the stock event log.
//!
//! Creating a movement touches two collections: the movement log and the
//! materials it mutates through the stock ledger. Both stores are locked
//! for the whole read-modify-write, and both files are staged before
//! either rename, so a write failure rolls back cleanly.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tally_engine::{
    apply_to_collection, new_record_id, Error as EngineError, LedgerOutcome, Movement,
    MovementKind, SyncStatus,
};

use super::{newer_than, SinceQuery};
use crate::error::Result;
use crate::state::AppState;

/// Create movement routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/movements", get(fetch).post(create))
}

/// GET /api/movements - full log, or movements newer than `since`.
async fn fetch(
    State(state): State<AppState>,
    Query(query): Query<SinceQuery>,
) -> Result<Json<Vec<Movement>>> {
    let movements = state.stores.movements.snapshot().await;
    Ok(Json(newer_than(movements, query.since)))
}

/// Body for movement creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateMovement {
    id: Option<String>,
    material_id: String,
    kind: MovementKind,
    quantity: i64,
}

/// Response for movement creation; `warning` reports a dangling material
/// reference instead of swallowing it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateMovementResponse {
    #[serde(flatten)]
    movement: Movement,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

/// POST /api/movements - append to the log and apply the stock effect.
async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateMovement>,
) -> Result<(StatusCode, Json<CreateMovementResponse>)> {
    let now = Utc::now();
    let movement = Movement {
        id: body.id.unwrap_or_else(new_record_id),
        material_id: body.material_id,
        kind: body.kind,
        quantity: body.quantity,
        timestamp: now,
        sync_status: SyncStatus::Synced,
    };

    let stores = &state.stores;
    // Lock order: materials before movements, always.
    let mut materials_guard = stores.materials.lock_write().await;
    let mut movements_guard = stores.movements.lock_write().await;

    let mut materials = materials_guard.clone();
    let mut movements = movements_guard.clone();

    // Newest first
    movements.insert(0, movement.clone());

    let outcome = apply_to_collection(&mut materials, &movement, now);
    let warning = match outcome {
        LedgerOutcome::UnknownMaterial => {
            tracing::warn!(
                movement_id = %movement.id,
                material_id = %movement.material_id,
                "movement references unknown material; stock not updated"
            );
            Some(EngineError::UnknownMaterial(movement.material_id.clone()).to_string())
        }
        LedgerOutcome::Applied { version, .. } => {
            tracing::info!(
                movement_id = %movement.id,
                material_id = %movement.material_id,
                version,
                "movement applied"
            );
            None
        }
        LedgerOutcome::NoEffect => None,
    };

    // Stage both files before renaming either.
    let staged_movements = stores.movements.stage(&movements)?;
    let staged_materials = stores.materials.stage(&materials)?;
    staged_movements.commit()?;
    staged_materials.commit()?;

    *materials_guard = materials;
    *movements_guard = movements;

    Ok((
        StatusCode::CREATED,
        Json(CreateMovementResponse { movement, warning }),
    ))
}
