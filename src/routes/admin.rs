use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, patch, post},
};

use crate::{
    dto::admin::{CreateBasketRequest, CreateUserRequest, CreateWatchRequest, UpdateWatchRequest},
    error::AppResult,
    middleware::{auth::AuthUser, json::ValidJson},
    models::{AdminBasket, AdminUser, AdminWatch, AdminWatchRow, BasketItemRepr},
    routes::params::PrimaryKey,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/watches/", get(list_watches).post(create_watch))
        .route("/watches/{id}/", patch(update_watch).delete(delete_watch))
        .route("/baskets/", get(list_baskets).post(create_basket))
        .route("/baskets/{id}/", delete(delete_basket))
        .route("/basket-items/", get(list_basket_items))
        .route("/users/", post(create_user))
}

#[utoipa::path(
    get,
    path = "/admin/watches/",
    responses(
        (status = 200, description = "All watches, inactive ones included", body = Vec<AdminWatchRow>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_watches(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<AdminWatchRow>>> {
    let watches = admin_service::list_watches(&state, &user).await?;
    Ok(Json(watches))
}

#[utoipa::path(
    post,
    path = "/admin/watches/",
    request_body = CreateWatchRequest,
    responses(
        (status = 201, description = "Watch created", body = AdminWatch),
        (status = 400, description = "Invalid fields"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_watch(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(payload): ValidJson<CreateWatchRequest>,
) -> AppResult<(StatusCode, Json<AdminWatch>)> {
    let watch = admin_service::create_watch(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(watch)))
}

#[utoipa::path(
    patch,
    path = "/admin/watches/{id}/",
    params(
        ("id" = i32, Path, description = "Watch ID")
    ),
    request_body = UpdateWatchRequest,
    responses(
        (status = 200, description = "Watch updated", body = AdminWatch),
        (status = 400, description = "Invalid fields"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Watch not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_watch(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
    user: AuthUser,
    ValidJson(payload): ValidJson<UpdateWatchRequest>,
) -> AppResult<Json<AdminWatch>> {
    let watch = admin_service::update_watch(&state, &user, id, payload).await?;
    Ok(Json(watch))
}

#[utoipa::path(
    delete,
    path = "/admin/watches/{id}/",
    params(
        ("id" = i32, Path, description = "Watch ID")
    ),
    responses(
        (status = 204, description = "Watch and its basket items deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Watch not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_watch(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
    user: AuthUser,
) -> AppResult<StatusCode> {
    admin_service::delete_watch(&state, &user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/baskets/",
    responses(
        (status = 200, description = "All baskets", body = Vec<AdminBasket>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_baskets(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<AdminBasket>>> {
    let baskets = admin_service::list_baskets(&state, &user).await?;
    Ok(Json(baskets))
}

#[utoipa::path(
    post,
    path = "/admin/baskets/",
    request_body = CreateBasketRequest,
    responses(
        (status = 201, description = "Basket created", body = AdminBasket),
        (status = 400, description = "Unknown user or user already has a basket"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_basket(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(payload): ValidJson<CreateBasketRequest>,
) -> AppResult<(StatusCode, Json<AdminBasket>)> {
    let basket = admin_service::create_basket(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(basket)))
}

#[utoipa::path(
    delete,
    path = "/admin/baskets/{id}/",
    params(
        ("id" = i32, Path, description = "Basket ID")
    ),
    responses(
        (status = 204, description = "Basket and its items deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Basket not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_basket(
    State(state): State<AppState>,
    PrimaryKey(id): PrimaryKey,
    user: AuthUser,
) -> AppResult<StatusCode> {
    admin_service::delete_basket(&state, &user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/basket-items/",
    responses(
        (status = 200, description = "All basket items", body = Vec<BasketItemRepr>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_basket_items(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<BasketItemRepr>>> {
    let items = admin_service::list_basket_items(&state, &user).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/admin/users/",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = AdminUser),
        (status = 400, description = "Invalid fields or duplicate username"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_user(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<AdminUser>)> {
    let created = admin_service::create_user(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
