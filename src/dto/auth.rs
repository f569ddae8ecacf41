use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_not_blank;

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct TokenObtainRequest {
    #[validate(required, custom = "validate_not_blank")]
    pub username: Option<String>,
    #[validate(required, custom = "validate_not_blank")]
    pub password: Option<String>,
}

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct TokenRefreshRequest {
    #[validate(required, custom = "validate_not_blank")]
    pub refresh: Option<String>,
}

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct TokenVerifyRequest {
    #[validate(required, custom = "validate_not_blank")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub token_type: TokenType,
    pub user_id: i32,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}
