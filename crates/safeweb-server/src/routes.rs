// SPDX-License-Identifier: Apache-2.0

//! HTTP routes.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use safeweb_core::{Hostname, User, ping};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Presence of a configured credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CredentialStatus {
    /// Credential is set.
    Configured,
    /// Credential is missing or empty.
    Missing,
}

/// Response of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers.
    pub status: String,
    /// Whether `app.secret_key` is configured.
    pub secret_key: CredentialStatus,
}

/// Response of a successful `GET /ping`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    /// Standard output of the ping command.
    pub result: String,
}

/// Response of `GET /user`.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    /// Matching users.
    pub users: Vec<User>,
}

/// Raw query pairs, in request order. Repeated keys are kept.
type QueryPairs = Query<Vec<(String, String)>>;

/// First value of `name`, ignoring later repeats.
fn first_param(pairs: Vec<(String, String)>, name: &str) -> Option<String> {
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == name).then_some(value))
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ping", get(ping_host))
        .route("/user", get(get_user))
        .route("/user/safe", get(get_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let secret_key = match state.config.app.secret_key {
        Some(_) => CredentialStatus::Configured,
        None => CredentialStatus::Missing,
    };
    Json(HealthResponse {
        status: "ok".to_string(),
        secret_key,
    })
}

async fn ping_host(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Result<Json<PingResponse>, ApiError> {
    let candidate = first_param(pairs, "host").ok_or(ApiError::MissingParameter("host"))?;
    let host = Hostname::parse(&candidate).map_err(|reason| {
        debug!(%reason, "rejected hostname");
        ApiError::InvalidHostname
    })?;

    let result = ping(state.runner.as_ref(), &state.config.ping, &host).await?;
    Ok(Json(PingResponse { result }))
}

async fn get_user(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Result<Json<UsersResponse>, ApiError> {
    let raw = first_param(pairs, "id").ok_or(ApiError::MissingParameter("id"))?;
    let id: i64 = raw.trim().parse().map_err(|_| ApiError::InvalidId)?;

    let users = state.users.find_by_id(id).await?;
    Ok(Json(UsersResponse { users }))
}
