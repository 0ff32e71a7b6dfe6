//! Inventory endpoints - fetch and create materials.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tally_engine::{new_record_id, Material, SyncStatus};

use super::{newer_than, SinceQuery};
use crate::error::Result;
use crate::state::AppState;

/// Create inventory routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/inventory", get(fetch).post(create))
}

/// GET /api/inventory - full collection, or records newer than `since`.
async fn fetch(
    State(state): State<AppState>,
    Query(query): Query<SinceQuery>,
) -> Result<Json<Vec<Material>>> {
    let materials = state.stores.materials.snapshot().await;
    Ok(Json(newer_than(materials, query.since)))
}

/// Body for material creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateMaterial {
    id: Option<String>,
    code: String,
    description: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    current_stock: i64,
    #[serde(default)]
    min_stock: i64,
    #[serde(default)]
    location: String,
    #[serde(default)]
    supplier: String,
    #[serde(default)]
    unit_price: f64,
}

/// POST /api/inventory - stamp identity and version, append, persist.
async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateMaterial>,
) -> Result<(StatusCode, Json<Material>)> {
    let material = Material {
        id: body.id.unwrap_or_else(new_record_id),
        code: body.code,
        description: body.description,
        kind: body.kind,
        current_stock: body.current_stock,
        min_stock: body.min_stock,
        location: body.location,
        supplier: body.supplier,
        unit_price: body.unit_price,
        last_modified: Utc::now(),
        version: 1,
        sync_status: SyncStatus::Synced,
    };

    let created = material.clone();
    state
        .stores
        .materials
        .update(move |materials| materials.push(material))
        .await?;

    tracing::info!(code = %created.code, "material created");
    Ok((StatusCode::CREATED, Json(created)))
}
