//! Route table.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use super::{handler, state::AppState};

/// Build the application router with request tracing
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_check))
        .route("/cep/v1/{key}", get(handler::lookup_joined_futures))
        .route("/cep/v2/{key}", get(handler::lookup_task_per_call))
        .route(
            "/customer",
            get(handler::list_customers).post(handler::create_customer),
        )
        .route(
            "/customer/{id}",
            put(handler::replace_customer)
                .get(handler::get_customer)
                .patch(handler::update_customer)
                .delete(handler::delete_customer),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
