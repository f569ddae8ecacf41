use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::{error::AppError, services::auth_service, state::AppState};

pub const CREDENTIALS_NOT_PROVIDED: &str = "Authentication credentials were not provided.";

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
    pub is_staff: bool,
}

pub fn ensure_staff(user: &AuthUser) -> Result<(), AppError> {
    if !user.is_staff {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized(CREDENTIALS_NOT_PROVIDED.into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::InvalidToken)?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Unauthorized(CREDENTIALS_NOT_PROVIDED.into()))?;

        auth_service::authenticate(state, token).await
    }
}

/// Caller of a write endpoint on the public API.
///
/// Holds a user whenever a bearer token was sent. Anonymous writes are only let
/// through when the deployment disables write authentication.
#[derive(Debug, Clone)]
pub struct WriteAccess(pub Option<AuthUser>);

impl WriteAccess {
    pub fn user_id(&self) -> Option<i32> {
        self.0.as_ref().map(|user| user.user_id)
    }
}

impl FromRequestParts<AppState> for WriteAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.config.write_requires_auth || parts.headers.contains_key(header::AUTHORIZATION) {
            let user = AuthUser::from_request_parts(parts, state).await?;
            Ok(WriteAccess(Some(user)))
        } else {
            Ok(WriteAccess(None))
        }
    }
}
