//! Login endpoint - the placeholder credential contract.
//!
//! All authentication failures (unknown user, inactive account, wrong
//! password) return the same response, so the endpoint never reveals
//! whether a username exists.

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tally_engine::{authenticate, UserPublic};

use crate::error::Result;
use crate::state::AppState;

/// Create auth routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/auth/login", post(login))
}

/// Login request body.
#[derive(Debug, Deserialize)]
struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// Login response with the credential field redacted.
#[derive(Debug, Serialize)]
struct LoginResponse {
    success: bool,
    user: UserPublic,
    message: String,
}

/// POST /api/auth/login - verify the credential, refresh last access,
/// persist, and return the redacted user.
async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let now = Utc::now();

    let mut guard = state.stores.users.lock_write().await;
    let mut working = guard.clone();

    let public = {
        let user = authenticate(&mut working, &body.username, &body.password)?;
        user.last_access = Some(now);
        user.last_modified = now;
        user.redacted()
    };

    state.stores.users.stage(&working)?.commit()?;
    *guard = working;

    tracing::info!(username = %public.username, "login successful");
    Ok(Json(LoginResponse {
        success: true,
        user: public,
        message: "login successful".to_string(),
    }))
}
