use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    dto::auth::{Claims, TokenObtainRequest, TokenRefreshRequest, TokenType, TokenVerifyRequest},
    entity::users::{ActiveModel as UserActive, Column as UserCol, Entity as Users, Model as UserModel},
    error::{AppError, AppResult, FieldErrors},
    middleware::auth::AuthUser,
    models::{AccessToken, TokenPair},
    services::required,
    state::AppState,
};

const NO_ACTIVE_ACCOUNT: &str = "No active account found with the given credentials";

/// Store a new user with an argon2 hash of `password`.
pub async fn register_user<C>(
    db: &C,
    username: &str,
    password: &str,
    is_staff: bool,
) -> AppResult<UserModel>
where
    C: ConnectionTrait,
{
    let username = username.trim();
    let exist = Users::find()
        .filter(UserCol::Username.eq(username))
        .one(db)
        .await?;
    if exist.is_some() {
        return Err(AppError::Validation(FieldErrors::single(
            "username",
            "A user with that username already exists.",
        )));
    }

    let user = UserActive {
        username: Set(username.to_string()),
        password_hash: Set(hash_password(password)?),
        is_staff: Set(is_staff),
        is_active: Set(true),
        date_joined: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(user_id = user.id, is_staff, "user registered");
    Ok(user)
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(password_hash)
}

pub async fn obtain_pair(state: &AppState, payload: TokenObtainRequest) -> AppResult<TokenPair> {
    let username = required("username", &payload.username)?;
    let password = required("password", &payload.password)?;

    let user = Users::find()
        .filter(UserCol::Username.eq(username.trim()))
        .one(&state.orm)
        .await?
        .filter(|user| user.is_active)
        .ok_or_else(|| AppError::Unauthorized(NO_ACTIVE_ACCOUNT.into()))?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    if Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::Unauthorized(NO_ACTIVE_ACCOUNT.into()));
    }

    let pair = TokenPair {
        refresh: issue_token(&state.config, user.id, TokenType::Refresh)?,
        access: issue_token(&state.config, user.id, TokenType::Access)?,
    };
    tracing::info!(user_id = user.id, "token pair issued");
    Ok(pair)
}

pub async fn refresh(state: &AppState, payload: TokenRefreshRequest) -> AppResult<AccessToken> {
    let token = required("refresh", &payload.refresh)?;
    let claims = decode_token(&state.config, token)?;
    if claims.token_type != TokenType::Refresh {
        return Err(AppError::InvalidToken);
    }

    let user = Users::find_by_id(claims.user_id).one(&state.orm).await?;
    if !user.is_some_and(|user| user.is_active) {
        return Err(AppError::InvalidToken);
    }

    Ok(AccessToken {
        access: issue_token(&state.config, claims.user_id, TokenType::Access)?,
    })
}

/// Accepts any well-formed, unexpired token of either type.
pub fn verify(state: &AppState, payload: TokenVerifyRequest) -> AppResult<serde_json::Value> {
    let token = required("token", &payload.token)?;
    decode_token(&state.config, token)?;
    Ok(serde_json::json!({}))
}

/// Resolve a bearer access token to an active user.
pub async fn authenticate(state: &AppState, token: &str) -> AppResult<AuthUser> {
    let claims = decode_token(&state.config, token)?;
    if claims.token_type != TokenType::Access {
        return Err(AppError::InvalidToken);
    }

    let user = Users::find_by_id(claims.user_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;
    if !user.is_active {
        return Err(AppError::Unauthorized("User is inactive".into()));
    }

    Ok(AuthUser {
        user_id: user.id,
        is_staff: user.is_staff,
    })
}

pub fn issue_token(config: &AppConfig, user_id: i32, token_type: TokenType) -> AppResult<String> {
    let ttl = match token_type {
        TokenType::Access => config.access_token_ttl_secs,
        TokenType::Refresh => config.refresh_token_ttl_secs,
    };
    let issued_at = Utc::now();
    let expiration = issued_at
        .checked_add_signed(Duration::seconds(ttl))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        token_type,
        user_id,
        jti: Uuid::new_v4().simple().to_string(),
        iat: issued_at.timestamp(),
        exp: expiration.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub fn decode_token(config: &AppConfig, token: &str) -> AppResult<Claims> {
    let mut validation = Validation::default();
    validation.leeway = 0;
    decode::<Claims>(
        token.trim(),
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidToken)
}
