//! Mapping of use case errors to HTTP responses.
//!
//! Every error body has the shape `{"error", "message", "status"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::ValueObjectError,
    usecase::{CustomerError, FetchLookupError},
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Lookup(#[from] FetchLookupError),

    #[error(transparent)]
    InvalidInput(#[from] ValueObjectError),

    /// Path id that no customer can ever have
    #[error("Customer not found: {0}")]
    UnknownCustomerId(i64),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Customer(CustomerError::NotFound { .. }) | Self::UnknownCustomerId(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Customer(CustomerError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Lookup(FetchLookupError::AggregatedFetch { .. }) => StatusCode::BAD_GATEWAY,
            Self::InvalidInput(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("{} {}", status.as_u16(), message);
        } else {
            tracing::warn!("{} {}", status.as_u16(), message);
        }

        let body = serde_json::json!({
            "error": status.canonical_reason().unwrap_or("Unknown"),
            "message": message,
            "status": status.as_u16(),
        });
        (status, Json(body)).into_response()
    }
}
