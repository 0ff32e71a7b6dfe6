//! User endpoints. Passwords never leave the server.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tally_engine::{email_taken, new_record_id, Error as EngineError, SyncStatus, User, UserPublic};

use crate::error::Result;
use crate::state::AppState;

/// Create user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/users", get(fetch).post(create))
}

/// Query parameters for the user fetch.
#[derive(Debug, Deserialize)]
struct UsersQuery {
    since: Option<DateTime<Utc>>,
    #[serde(rename = "includeDeleted", default)]
    include_deleted: bool,
}

/// GET /api/users - redacted records; soft-deleted and inactive accounts
/// are hidden unless `includeDeleted` is set.
async fn fetch(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> Result<Json<Vec<UserPublic>>> {
    let users = state.stores.users.snapshot().await;

    let result: Vec<UserPublic> = users
        .into_iter()
        .filter(|u| query.include_deleted || u.is_usable())
        .filter(|u| match query.since {
            None => true,
            Some(cutoff) => u.last_modified > cutoff,
        })
        .map(|u| u.redacted())
        .collect();

    Ok(Json(result))
}

/// Body for user creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUser {
    id: Option<String>,
    username: String,
    password: String,
    full_name: String,
    email: String,
    role: String,
    active: Option<bool>,
    #[serde(default)]
    shift: String,
}

/// POST /api/users - rejects a duplicate email among non-deleted users;
/// the collection on disk is untouched on rejection.
async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> Result<(StatusCode, Json<UserPublic>)> {
    let now = Utc::now();

    let mut guard = state.stores.users.lock_write().await;

    if email_taken(&guard, &body.email) {
        return Err(EngineError::DuplicateEmail(body.email).into());
    }

    let user = User {
        id: body.id.unwrap_or_else(new_record_id),
        username: body.username,
        password: body.password,
        full_name: body.full_name,
        email: body.email,
        role: body.role,
        active: body.active.unwrap_or(true),
        shift: body.shift,
        created_at: now,
        last_access: None,
        last_modified: now,
        sync_status: SyncStatus::Synced,
        deleted: false,
    };
    let public = user.redacted();

    let mut working = guard.clone();
    working.push(user);
    state.stores.users.stage(&working)?.commit()?;
    *guard = working;

    tracing::info!(email = %public.email, "user created");
    Ok((StatusCode::CREATED, Json(public)))
}
