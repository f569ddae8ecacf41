use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    routing::get,
};

use crate::{
    error::AppResult,
    models::WatchRepr,
    response::Listing,
    routes::params::{PrimaryKey, WatchQuery},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/watch/", get(list_watches))
        .route("/watch/{id}/", get(get_watch))
}

#[utoipa::path(
    get,
    path = "/api/v1/watch/",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive match on name; every whitespace or comma separated term must match"),
        ("ordering" = Option<String>, Query, description = "Comma separated `name` / `price`, prefix with `-` for descending"),
        ("page" = Option<u64>, Query, description = "Page number when pagination is enabled"),
    ),
    responses(
        (status = 200, description = "List watches", body = Vec<WatchRepr>),
        (status = 404, description = "Invalid page"),
    ),
    tag = "Watches"
)]
pub async fn list_watches(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    query: WatchQuery,
) -> AppResult<Json<Listing<WatchRepr>>> {
    let page = query.pagination.page_request(state.config.page_size)?;
    let listed = catalog_service::list_watches(&state, &query, page).await?;
    Ok(Json(listed.into_listing(&uri)))
}

#[utoipa::path(
    get,
    path = "/api/v1/watch/{id}/",
    params(
        ("id" = i32, Path, description = "Watch ID")
    ),
    responses(
        (status = 200, description = "Get watch", body = WatchRepr),
        (status = 404, description = "Watch not found"),
    ),
    tag = "Watches"
)]
pub async fn get_watch(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
) -> AppResult<Json<WatchRepr>> {
    let watch = catalog_service::get_watch(&state, id).await?;
    Ok(Json(watch))
}
