use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{
    keep_null, validate_name, validate_not_blank, validate_pk, validate_price, validate_username,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWatchRequest {
    #[validate(required, custom = "validate_name")]
    pub name: Option<String>,
    #[validate(required, custom = "validate_not_blank")]
    pub description: Option<String>,
    /// Defaults to manufacturer 1 when omitted.
    #[serde(default, deserialize_with = "keep_null")]
    #[validate(custom = "validate_pk")]
    #[schema(value_type = Option<i32>)]
    pub manufacturer: Option<Value>,
    #[validate(required, custom = "validate_price")]
    #[schema(value_type = Option<String>, example = "1999.00")]
    pub price: Option<Decimal>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateWatchRequest {
    #[validate(custom = "validate_name")]
    pub name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "keep_null")]
    #[validate(custom = "validate_pk")]
    #[schema(value_type = Option<i32>)]
    pub manufacturer: Option<Value>,
    #[validate(custom = "validate_price")]
    #[schema(value_type = Option<String>, example = "1999.00")]
    pub price: Option<Decimal>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBasketRequest {
    #[serde(default, deserialize_with = "keep_null")]
    #[validate(required, custom = "validate_pk")]
    #[schema(value_type = Option<i32>)]
    pub user: Option<Value>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(required, custom = "validate_username")]
    pub username: Option<String>,
    #[validate(required, custom = "validate_not_blank")]
    pub password: Option<String>,
    #[serde(default)]
    pub is_staff: bool,
}
