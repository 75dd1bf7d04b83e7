use axum::{extract::State, http::StatusCode};
use tracing::warn;

use crate::ApiState;

/// 503 when the database does not answer.
pub(super) async fn get_health(State(state): State<ApiState>) -> StatusCode {
    match state.repo.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            warn!(task = "healthz", error = %e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
