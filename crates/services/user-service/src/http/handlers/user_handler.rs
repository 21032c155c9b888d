//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::User;

use crate::http::state::AppState;
use crate::service::UserService;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/license-plate/:plate", get(get_user_by_license_plate))
        .route("/:name", get(get_user))
}

/// Get user by first name
#[utoipa::path(
    get,
    path = "/users/{name}",
    tag = "Users",
    params(
        ("name" = String, Path, description = "User first name")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid name"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service().await?.get_user(&name).await?;
    Ok(Json(user))
}

/// Get user by license plate
#[utoipa::path(
    get,
    path = "/users/license-plate/{plate}",
    tag = "Users",
    params(
        ("plate" = String, Path, description = "License plate, separators ignored")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid license plate"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_license_plate(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service()
        .await?
        .get_user_by_license_plate(&plate)
        .await?;
    Ok(Json(user))
}
