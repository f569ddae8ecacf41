use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::basket::{BasketItemPatch, BasketItemRequest},
    error::AppResult,
    middleware::{auth::WriteAccess, json::ValidJson},
    models::{BasketItemRepr, CartStatus},
    response::Listing,
    routes::params::{Pagination, PrimaryKey},
    services::basket_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/basket/", get(list_items).post(add_to_cart))
        .route(
            "/basket/{id}/",
            get(get_item)
                .put(update_item)
                .patch(partial_update_item)
                .delete(delete_item),
        )
}

#[utoipa::path(
    get,
    path = "/api/v1/basket/",
    params(
        ("page" = Option<u64>, Query, description = "Page number when pagination is enabled"),
    ),
    responses(
        (status = 200, description = "List basket items", body = Vec<BasketItemRepr>)
    ),
    tag = "Basket"
)]
pub async fn list_items(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    pagination: Pagination,
) -> AppResult<Json<Listing<BasketItemRepr>>> {
    let page = pagination.page_request(state.config.page_size)?;
    let listed = basket_service::list_items(&state, page).await?;
    Ok(Json(listed.into_listing(&uri)))
}

#[utoipa::path(
    post,
    path = "/api/v1/basket/",
    request_body = BasketItemRequest,
    responses(
        (status = 200, description = "Item stored in the basket", body = CartStatus),
        (status = 400, description = "Missing, malformed or unknown references"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Basket"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    access: WriteAccess,
    ValidJson(payload): ValidJson<BasketItemRequest>,
) -> AppResult<Json<CartStatus>> {
    let status = basket_service::add_item(&state, &access, payload).await?;
    Ok(Json(status))
}

#[utoipa::path(
    get,
    path = "/api/v1/basket/{id}/",
    params(
        ("id" = i32, Path, description = "Basket item ID")
    ),
    responses(
        (status = 200, description = "Get basket item", body = BasketItemRepr),
        (status = 404, description = "Basket item not found"),
    ),
    tag = "Basket"
)]
pub async fn get_item(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
) -> AppResult<Json<BasketItemRepr>> {
    let item = basket_service::get_item(&state, id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    put,
    path = "/api/v1/basket/{id}/",
    params(
        ("id" = i32, Path, description = "Basket item ID")
    ),
    request_body = BasketItemRequest,
    responses(
        (status = 200, description = "Basket item replaced", body = BasketItemRepr),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Basket item not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Basket"
)]
pub async fn update_item(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
    access: WriteAccess,
    ValidJson(payload): ValidJson<BasketItemRequest>,
) -> AppResult<Json<BasketItemRepr>> {
    let item = basket_service::update_item(&state, &access, id, payload).await?;
    Ok(Json(item))
}

#[utoipa::path(
    patch,
    path = "/api/v1/basket/{id}/",
    params(
        ("id" = i32, Path, description = "Basket item ID")
    ),
    request_body = BasketItemPatch,
    responses(
        (status = 200, description = "Basket item updated", body = BasketItemRepr),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Basket item not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Basket"
)]
pub async fn partial_update_item(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
    access: WriteAccess,
    ValidJson(payload): ValidJson<BasketItemPatch>,
) -> AppResult<Json<BasketItemRepr>> {
    let item = basket_service::partial_update_item(&state, &access, id, payload).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/v1/basket/{id}/",
    params(
        ("id" = i32, Path, description = "Basket item ID")
    ),
    responses(
        (status = 204, description = "Basket item deleted"),
        (status = 404, description = "Basket item not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Basket"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
    access: WriteAccess,
) -> AppResult<StatusCode> {
    basket_service::delete_item(&state, &access, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
