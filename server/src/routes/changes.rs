//! Component-change endpoints, including the batch-sync merge.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tally_engine::{merge_collection, new_record_id, ComponentChange, MergeReport, SyncStatus};

use super::{newer_than, SinceQuery};
use crate::error::Result;
use crate::state::AppState;

/// Create component-change routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/component-changes", get(fetch).post(create))
        .route("/api/component-changes/sync", post(sync))
}

/// GET /api/component-changes - full collection, or records newer than
/// `since` by effective timestamp.
async fn fetch(
    State(state): State<AppState>,
    Query(query): Query<SinceQuery>,
) -> Result<Json<Vec<ComponentChange>>> {
    let changes = state.stores.changes.snapshot().await;
    Ok(Json(newer_than(changes, query.since)))
}

/// Body for direct record creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateChange {
    id: Option<String>,
    #[serde(default)]
    equipment_tag: String,
    date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// POST /api/component-changes - stamp identity and timestamp, prepend,
/// persist.
async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateChange>,
) -> Result<(StatusCode, Json<ComponentChange>)> {
    let change = ComponentChange {
        id: body.id.unwrap_or_else(new_record_id),
        equipment_tag: body.equipment_tag,
        timestamp: Some(Utc::now()),
        date: body.date,
        sync_status: SyncStatus::Synced,
        extra: body.extra,
    };

    let created = change.clone();
    state
        .stores
        .changes
        .update(move |changes| changes.insert(0, change))
        .await?;

    tracing::info!(equipment_tag = %created.equipment_tag, "component change recorded");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Body for batch sync.
#[derive(Debug, Deserialize)]
struct SyncRequest {
    #[serde(default)]
    records: Vec<ComponentChange>,
}

/// Response for batch sync: the full merged collection plus the server
/// timestamp clients use for their next incremental fetch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SyncResponse {
    records: Vec<ComponentChange>,
    server_time: DateTime<Utc>,
    total_synced: usize,
    report: MergeReport,
}

/// POST /api/component-changes/sync - last-writer-wins merge of a client
/// batch. Atomic with respect to concurrent merges: the write lock is
/// held for the whole load-merge-save sequence.
async fn sync(
    State(state): State<AppState>,
    Json(body): Json<SyncRequest>,
) -> Result<Json<SyncResponse>> {
    let now = Utc::now();
    let batch = body.records.len();

    let mut guard = state.stores.changes.lock_write().await;
    let mut working = guard.clone();

    let report = merge_collection(&mut working, body.records, now)?;

    state.stores.changes.stage(&working)?.commit()?;
    let records = working.clone();
    *guard = working;

    tracing::info!(
        batch,
        inserted = report.inserted,
        replaced = report.replaced,
        kept = report.kept,
        "component changes synchronized"
    );

    Ok(Json(SyncResponse {
        total_synced: records.len(),
        records,
        server_time: now,
        report,
    }))
}
