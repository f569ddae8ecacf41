use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::auth::{TokenObtainRequest, TokenRefreshRequest, TokenVerifyRequest},
    error::AppResult,
    middleware::json::ValidJson,
    models::{AccessToken, TokenPair},
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token/", post(obtain_token))
        .route("/token/refresh/", post(refresh_token))
        .route("/token/verify/", post(verify_token))
}

#[utoipa::path(
    post,
    path = "/api/v1/token/",
    request_body = TokenObtainRequest,
    responses(
        (status = 200, description = "Access and refresh token pair", body = TokenPair),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "No active account found with the given credentials"),
    ),
    tag = "Auth"
)]
pub async fn obtain_token(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<TokenObtainRequest>,
) -> AppResult<Json<TokenPair>> {
    let pair = auth_service::obtain_pair(&state, payload).await?;
    Ok(Json(pair))
}

#[utoipa::path(
    post,
    path = "/api/v1/token/refresh/",
    request_body = TokenRefreshRequest,
    responses(
        (status = 200, description = "Fresh access token", body = AccessToken),
        (status = 401, description = "Token is invalid or expired"),
    ),
    tag = "Auth"
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<TokenRefreshRequest>,
) -> AppResult<Json<AccessToken>> {
    let access = auth_service::refresh(&state, payload).await?;
    Ok(Json(access))
}

#[utoipa::path(
    post,
    path = "/api/v1/token/verify/",
    request_body = TokenVerifyRequest,
    responses(
        (status = 200, description = "Token is valid", body = serde_json::Value),
        (status = 401, description = "Token is invalid or expired"),
    ),
    tag = "Auth"
)]
pub async fn verify_token(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<TokenVerifyRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let body = auth_service::verify(&state, payload)?;
    Ok(Json(body))
}
