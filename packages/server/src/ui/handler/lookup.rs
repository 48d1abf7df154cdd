//! `/cep` endpoint handlers: the same lookup with two concurrency strategies.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    domain::{LookupKey, LookupStrategy},
    infrastructure::dto::http::LookupResponseDto,
    ui::{error::ApiError, state::AppState},
    usecase::FetchLookupUseCase,
};

/// GET /cep/v1/{key}
pub async fn lookup_joined_futures(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<LookupResponseDto>, ApiError> {
    lookup(&state, key, LookupStrategy::JoinedFutures).await
}

/// GET /cep/v2/{key}
pub async fn lookup_task_per_call(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<LookupResponseDto>, ApiError> {
    lookup(&state, key, LookupStrategy::TaskPerCall).await
}

async fn lookup(
    state: &AppState,
    key: String,
    strategy: LookupStrategy,
) -> Result<Json<LookupResponseDto>, ApiError> {
    let key = LookupKey::new(key)?;
    let usecase = FetchLookupUseCase::new(
        state.lookup_client.clone(),
        state.source_a.clone(),
        state.source_b.clone(),
        state.lookup_timeout,
    );
    let result = usecase.execute(key, strategy).await?;
    Ok(Json(result.into()))
}
