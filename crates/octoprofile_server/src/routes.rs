//! HTTP routes and error envelope.
//!
//! One aggregation endpoint plus a liveness route. Every failure leaves the
//! process as a JSON `{"error": ...}` envelope; no request failure is fatal
//! to the server.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use octoprofile::{AggregateError, GitHubClient, ProfileSummary, summarize};
use serde::Deserialize;

/// Shared state: the immutable upstream client. No per-request state lives
/// here, so concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    pub client: GitHubClient,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/summary", post(summary))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Inbound request body for the aggregation endpoint.
#[derive(Debug, Deserialize)]
struct SummaryRequest {
    #[serde(default)]
    username: String,
}

async fn summary(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<ProfileSummary>, ApiError> {
    let Json(request) =
        payload.map_err(|e| ApiError::bad_request(format!("invalid request payload: {e}")))?;

    let username = request.username.trim();
    if username.is_empty() {
        return Err(ApiError::bad_request("username is required"));
    }

    let summary = summarize(&state.client, username).await?;
    Ok(Json(summary))
}

/// An error ready to be written as the JSON error envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<AggregateError> for ApiError {
    /// Map upstream failures to response statuses.
    ///
    /// An unknown username is the caller's mistake and gets 404; everything
    /// else that went wrong upstream is a gateway-side failure and gets 502.
    fn from(err: AggregateError) -> Self {
        let status = if err.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_GATEWAY
        };

        tracing::warn!(stage = err.stage.describe(), "aggregation failed: {err}");

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
