use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::user_dto::{LoginUserPayload, RegisterUserPayload, UserResponse},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .register(payload.email, payload.name, payload.password)
        .await?;
    tracing::info!(id = user.id, "user registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[axum::debug_handler]
pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginUserPayload>,
) -> Result<impl IntoResponse> {
    let user = state
        .user_service
        .login(&payload.email, &payload.password)
        .await?;
    Ok(Json(UserResponse::from(user)))
}
