//! `/customer` endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::{CustomerId, IdempotencyKey},
    infrastructure::dto::http::{
        CustomerDto, CustomerEnvelopeDto, CustomerPatchDto, CustomerRequestDto,
    },
    ui::{error::ApiError, state::AppState},
    usecase::{
        CreateCustomerUseCase, DeleteCustomerUseCase, GetCustomerUseCase, ListCustomersUseCase,
        ReplaceCustomerUseCase, UpdateCustomerUseCase,
    },
};

/// Header carrying the client's idempotency token on PUT
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

fn idempotency_key(headers: &HeaderMap) -> Result<Option<IdempotencyKey>, ApiError> {
    headers
        .get(IDEMPOTENCY_KEY_HEADER)
        .map(|value| -> Result<IdempotencyKey, ApiError> {
            let value = value.to_str().map_err(|_| {
                ApiError::BadRequest("Idempotency-Key must be visible ASCII".to_string())
            })?;
            Ok(IdempotencyKey::new(value.to_string())?)
        })
        .transpose()
}

fn customer_id(id: i64) -> Result<CustomerId, ApiError> {
    CustomerId::new(id).map_err(|_| ApiError::UnknownCustomerId(id))
}

/// POST /customer
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CustomerRequestDto>,
) -> Result<(StatusCode, Json<CustomerDto>), ApiError> {
    let usecase = CreateCustomerUseCase::new(state.repository.clone());
    let created = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /customer
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let usecase = ListCustomersUseCase::new(state.repository.clone());
    let customers = usecase.execute().await?;
    Ok(Json(customers.into_iter().map(CustomerDto::from).collect()))
}

/// GET /customer/{id}
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerEnvelopeDto>, ApiError> {
    let id = customer_id(id)?;
    let usecase = GetCustomerUseCase::new(state.repository.clone());
    let (customer, elapsed_ms) = usecase.execute(id).await?;

    Ok(Json(CustomerEnvelopeDto {
        customer: customer.into(),
        elapsed_ms,
        method: "getCustomer".to_string(),
        cache_hit: None,
    }))
}

/// PUT /customer/{id}, optionally guarded by `Idempotency-Key`
pub async fn replace_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<CustomerRequestDto>,
) -> Result<Json<CustomerEnvelopeDto>, ApiError> {
    let id = customer_id(id)?;
    let key = idempotency_key(&headers)?;
    let usecase =
        ReplaceCustomerUseCase::new(state.repository.clone(), state.idempotency.clone());
    let outcome = usecase.execute(key, id, body.into()).await?;

    Ok(Json(CustomerEnvelopeDto {
        customer: outcome.customer.into(),
        elapsed_ms: outcome.elapsed_ms,
        method: "replaceCustomer".to_string(),
        cache_hit: Some(outcome.cache_hit),
    }))
}

/// PATCH /customer/{id}
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<CustomerPatchDto>,
) -> Result<Json<CustomerEnvelopeDto>, ApiError> {
    let id = customer_id(id)?;
    let usecase = UpdateCustomerUseCase::new(state.repository.clone());
    let (customer, elapsed_ms) = usecase.execute(id, body.into()).await?;

    Ok(Json(CustomerEnvelopeDto {
        customer: customer.into(),
        elapsed_ms,
        method: "updateCustomer".to_string(),
        cache_hit: None,
    }))
}

/// DELETE /customer/{id}
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerDto>, ApiError> {
    let id = customer_id(id)?;
    let usecase = DeleteCustomerUseCase::new(state.repository.clone());
    let deleted = usecase.execute(id).await?;
    Ok(Json(deleted.into()))
}
