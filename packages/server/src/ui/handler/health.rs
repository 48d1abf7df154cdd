//! Health check endpoint.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::http::HealthDto,
    ui::state::AppState,
    usecase::{CheckUpstreamHealthUseCase, UpstreamHealth},
};

/// GET /api/health
///
/// Answers `200 {"status":"ok"}` while source A answers the probe, and
/// `503 {"status":"down"}` with the upstream error otherwise.
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthDto>) {
    let usecase = CheckUpstreamHealthUseCase::new(
        state.lookup_client.clone(),
        state.source_a.clone(),
        state.health_probe_key.clone(),
    );
    let upstream = usecase.execute().await;

    let (status, label) = match upstream {
        UpstreamHealth::Up => (StatusCode::OK, "ok"),
        UpstreamHealth::Down { .. } => (StatusCode::SERVICE_UNAVAILABLE, "down"),
    };

    (
        status,
        Json(HealthDto {
            status: label.to_string(),
            upstream: upstream.into(),
        }),
    )
}
