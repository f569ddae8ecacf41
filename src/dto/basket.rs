use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{keep_null, validate_pk, validate_quantity};

/// Body of `POST /basket/` and `PUT /basket/{id}/`.
///
/// References are kept as raw JSON so that a wrong type is reported against the
/// field instead of rejecting the whole document.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BasketItemRequest {
    #[serde(default, deserialize_with = "keep_null")]
    #[validate(required, custom = "validate_pk")]
    #[schema(value_type = Option<i32>)]
    pub product: Option<Value>,
    #[serde(default, deserialize_with = "keep_null")]
    #[validate(required, custom = "validate_pk")]
    #[schema(value_type = Option<i32>)]
    pub basket: Option<Value>,
    #[serde(default, deserialize_with = "keep_null")]
    #[validate(custom = "validate_quantity")]
    #[schema(value_type = Option<i32>)]
    pub quantity: Option<Value>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct BasketItemPatch {
    #[serde(default, deserialize_with = "keep_null")]
    #[validate(custom = "validate_pk")]
    #[schema(value_type = Option<i32>)]
    pub product: Option<Value>,
    #[serde(default, deserialize_with = "keep_null")]
    #[validate(custom = "validate_pk")]
    #[schema(value_type = Option<i32>)]
    pub basket: Option<Value>,
    #[serde(default, deserialize_with = "keep_null")]
    #[validate(custom = "validate_quantity")]
    #[schema(value_type = Option<i32>)]
    pub quantity: Option<Value>,
}
