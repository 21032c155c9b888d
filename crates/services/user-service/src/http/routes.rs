//! Route configuration.

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::http::handlers::{health_routes, user_routes};
use crate::http::openapi::ApiDoc;
use crate::http::state::AppState;

/// Create the application router with all routes.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/users", user_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
