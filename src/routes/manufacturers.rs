use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::manufacturers::{ManufacturerPatch, ManufacturerRequest},
    error::AppResult,
    middleware::{auth::WriteAccess, json::ValidJson},
    models::{ManufacturerRepr, ManufacturerWatches},
    response::Listing,
    routes::params::{Pagination, PrimaryKey},
    services::manufacturer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/manufacturers/",
            get(list_manufacturers).post(create_manufacturer),
        )
        .route(
            "/manufacturers/{id}/",
            get(get_manufacturer)
                .put(update_manufacturer)
                .patch(partial_update_manufacturer)
                .delete(delete_manufacturer),
        )
        .route("/manufacturers/{id}/watches/", get(manufacturer_watches))
}

#[utoipa::path(
    get,
    path = "/api/v1/manufacturers/",
    params(
        ("page" = Option<u64>, Query, description = "Page number when pagination is enabled"),
    ),
    responses(
        (status = 200, description = "List manufacturers with their watches", body = Vec<ManufacturerRepr>)
    ),
    tag = "Manufacturers"
)]
pub async fn list_manufacturers(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    pagination: Pagination,
) -> AppResult<Json<Listing<ManufacturerRepr>>> {
    let page = pagination.page_request(state.config.page_size)?;
    let listed = manufacturer_service::list_manufacturers(&state, page).await?;
    Ok(Json(listed.into_listing(&uri)))
}

#[utoipa::path(
    post,
    path = "/api/v1/manufacturers/",
    request_body = ManufacturerRequest,
    responses(
        (status = 201, description = "Manufacturer created", body = ManufacturerRepr),
        (status = 400, description = "Invalid fields"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Manufacturers"
)]
pub async fn create_manufacturer(
    State(state): State<AppState>,
    access: WriteAccess,
    ValidJson(payload): ValidJson<ManufacturerRequest>,
) -> AppResult<(StatusCode, Json<ManufacturerRepr>)> {
    let manufacturer = manufacturer_service::create_manufacturer(&state, &access, payload).await?;
    Ok((StatusCode::CREATED, Json(manufacturer)))
}

#[utoipa::path(
    get,
    path = "/api/v1/manufacturers/{id}/",
    params(
        ("id" = i32, Path, description = "Manufacturer ID")
    ),
    responses(
        (status = 200, description = "Get manufacturer", body = ManufacturerRepr),
        (status = 404, description = "Manufacturer not found"),
    ),
    tag = "Manufacturers"
)]
pub async fn get_manufacturer(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
) -> AppResult<Json<ManufacturerRepr>> {
    let manufacturer = manufacturer_service::get_manufacturer(&state, id).await?;
    Ok(Json(manufacturer))
}

#[utoipa::path(
    put,
    path = "/api/v1/manufacturers/{id}/",
    params(
        ("id" = i32, Path, description = "Manufacturer ID")
    ),
    request_body = ManufacturerRequest,
    responses(
        (status = 200, description = "Manufacturer replaced", body = ManufacturerRepr),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Manufacturer not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Manufacturers"
)]
pub async fn update_manufacturer(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
    access: WriteAccess,
    ValidJson(payload): ValidJson<ManufacturerRequest>,
) -> AppResult<Json<ManufacturerRepr>> {
    let manufacturer =
        manufacturer_service::update_manufacturer(&state, &access, id, payload).await?;
    Ok(Json(manufacturer))
}

#[utoipa::path(
    patch,
    path = "/api/v1/manufacturers/{id}/",
    params(
        ("id" = i32, Path, description = "Manufacturer ID")
    ),
    request_body = ManufacturerPatch,
    responses(
        (status = 200, description = "Manufacturer updated", body = ManufacturerRepr),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Manufacturer not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Manufacturers"
)]
pub async fn partial_update_manufacturer(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
    access: WriteAccess,
    ValidJson(payload): ValidJson<ManufacturerPatch>,
) -> AppResult<Json<ManufacturerRepr>> {
    let manufacturer =
        manufacturer_service::partial_update_manufacturer(&state, &access, id, payload).await?;
    Ok(Json(manufacturer))
}

#[utoipa::path(
    delete,
    path = "/api/v1/manufacturers/{id}/",
    params(
        ("id" = i32, Path, description = "Manufacturer ID")
    ),
    responses(
        (status = 204, description = "Manufacturer, its watches and their basket items deleted"),
        (status = 404, description = "Manufacturer not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Manufacturers"
)]
pub async fn delete_manufacturer(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
    access: WriteAccess,
) -> AppResult<StatusCode> {
    manufacturer_service::delete_manufacturer(&state, &access, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/manufacturers/{id}/watches/",
    params(
        ("id" = i32, Path, description = "Manufacturer ID")
    ),
    responses(
        (status = 200, description = "Watches of one manufacturer", body = ManufacturerWatches),
        (status = 404, description = "Manufacturer not found"),
    ),
    tag = "Manufacturers"
)]
pub async fn manufacturer_watches(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
) -> AppResult<Json<ManufacturerWatches>> {
    let watches = manufacturer_service::manufacturer_watches(&state, id).await?;
    Ok(Json(watches))
}
