use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_name;

/// Body of a manufacturer create or full update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ManufacturerRequest {
    #[validate(required, custom = "validate_name")]
    pub name: Option<String>,
}

/// Body of a manufacturer partial update.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct ManufacturerPatch {
    #[validate(custom = "validate_name")]
    pub name: Option<String>,
}
