use crate::{
    dto::{UserRequest, UserResponse},
    error::{AppError, AppResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;

/// Liveness probe; answers the literal text `user`.
pub async fn hello() -> &'static str {
    "user"
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequest>,
) -> AppResult<StatusCode> {
    let errors = request.validation_errors();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    state
        .user_service
        .create_user(&state.config.keycloak_realm, &request.to_domain())
        .await?;

    Ok(StatusCode::OK)
}

pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let profile = state
        .user_service
        .get_user_profile(&state.config.keycloak_realm, &user_id)
        .await?;

    Ok(Json(profile.into()))
}

pub async fn get_user_roles(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<HashMap<String, Vec<String>>>> {
    let roles = state
        .user_service
        .get_user_roles(&state.config.keycloak_realm, &user_id)
        .await?;

    Ok(Json(HashMap::from([(user_id, roles)])))
}

pub async fn get_user_groups(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<HashMap<String, Vec<String>>>> {
    let groups = state
        .user_service
        .get_user_groups(&state.config.keycloak_realm, &user_id)
        .await?;

    Ok(Json(HashMap::from([(user_id, groups)])))
}
