//! User registration and login endpoints

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserInfo},
};

use super::AuthenticatedUser;

/// Register a new user identity
#[utoipa::path(
    post,
    path = "/users/Register",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration succeeded", body = RegisterResponse),
        (status = 400, description = "Malformed request"),
        (status = 500, description = "Registration failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    request.validate()?;

    state.services.auth.register(&request).await?;

    Ok(Json(RegisterResponse { succeeded: true }))
}

/// Authenticate and obtain a bearer token
#[utoipa::path(
    post,
    path = "/users/Login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    request.validate()?;

    let token = state
        .services
        .auth
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
    }))
}

/// Identity of the calling user, decoded from the bearer token
#[utoipa::path(
    get,
    path = "/users/Me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserInfo),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(AuthenticatedUser(claims): AuthenticatedUser) -> Json<UserInfo> {
    Json(UserInfo {
        user_id: claims.user_id,
        email: claims.sub,
        roles: claims.roles,
    })
}
