use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    dto::admin::{CreateBasketRequest, CreateUserRequest, CreateWatchRequest, UpdateWatchRequest},
    entity::{
        Manufacturers, Users,
        basket_items::{Column as BasketItemCol, Entity as BasketItems},
        baskets::{ActiveModel as BasketActive, Column as BasketCol, Entity as Baskets},
        watches::{
            ActiveModel as WatchActive, Column as WatchCol, DEFAULT_MANUFACTURER_ID,
            Entity as Watches,
        },
    },
    error::{AppError, AppResult, FieldErrors},
    middleware::auth::{AuthUser, ensure_staff},
    models::{AdminBasket, AdminUser, AdminWatch, AdminWatchRow, BasketItemRepr},
    services::{auth_service, required, resolve_reference},
    state::AppState,
    validation::price_fits_backend,
};

pub async fn list_watches(state: &AppState, user: &AuthUser) -> AppResult<Vec<AdminWatchRow>> {
    ensure_staff(user)?;
    let watches = Watches::find()
        .order_by_asc(WatchCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(AdminWatchRow::from)
        .collect();
    Ok(watches)
}

pub async fn create_watch(
    state: &AppState,
    user: &AuthUser,
    payload: CreateWatchRequest,
) -> AppResult<AdminWatch> {
    ensure_staff(user)?;
    let name = required("name", &payload.name)?.trim().to_string();
    let description = required("description", &payload.description)?.clone();
    let price = *required("price", &payload.price)?;

    let mut errors = FieldErrors::new();
    if let Err(message) = price_fits_backend(&price, state.orm.get_database_backend()) {
        errors.add("price", message);
    }
    let manufacturer_id = match payload.manufacturer.as_ref() {
        Some(raw) => {
            resolve_reference::<Manufacturers, _>(&state.orm, "manufacturer", raw, &mut errors)
                .await?
        }
        None => {
            if Manufacturers::find_by_id(DEFAULT_MANUFACTURER_ID)
                .one(&state.orm)
                .await?
                .is_none()
            {
                errors.add(
                    "manufacturer",
                    format!(
                        "Invalid pk \"{DEFAULT_MANUFACTURER_ID}\" - object does not exist."
                    ),
                );
            }
            Some(DEFAULT_MANUFACTURER_ID)
        }
    };
    errors.into_result()?;

    let now = Utc::now();
    let watch = WatchActive {
        name: Set(name),
        description: Set(description),
        manufacturer_id: Set(manufacturer_id.unwrap_or(DEFAULT_MANUFACTURER_ID)),
        price: Set(price),
        time_created: Set(now.into()),
        time_updated: Set(now.into()),
        is_active: Set(payload.is_active.unwrap_or(true)),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(watch_id = watch.id, actor = user.user_id, "watch created");
    Ok(watch.into())
}

pub async fn update_watch(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateWatchRequest,
) -> AppResult<AdminWatch> {
    ensure_staff(user)?;
    let existing = Watches::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut errors = FieldErrors::new();
    if let Some(price) = payload.price.as_ref() {
        if let Err(message) = price_fits_backend(price, state.orm.get_database_backend()) {
            errors.add("price", message);
        }
    }
    let manufacturer_id = match payload.manufacturer.as_ref() {
        Some(raw) => {
            resolve_reference::<Manufacturers, _>(&state.orm, "manufacturer", raw, &mut errors)
                .await?
        }
        None => None,
    };
    errors.into_result()?;

    let mut active: WatchActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(manufacturer_id) = manufacturer_id {
        active.manufacturer_id = Set(manufacturer_id);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    active.time_updated = Set(Utc::now().into());
    let watch = active.update(&state.orm).await?;

    tracing::info!(watch_id = watch.id, actor = user.user_id, "watch updated");
    Ok(watch.into())
}

/// Delete a watch and every basket item holding it.
pub async fn delete_watch(state: &AppState, user: &AuthUser, id: i32) -> AppResult<()> {
    ensure_staff(user)?;
    let txn = state.orm.begin().await?;

    let items = BasketItems::delete_many()
        .filter(BasketItemCol::ProductId.eq(id))
        .exec(&txn)
        .await?;
    let result = Watches::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    txn.commit().await?;

    tracing::info!(
        watch_id = id,
        basket_items = items.rows_affected,
        actor = user.user_id,
        "watch deleted"
    );
    Ok(())
}

pub async fn list_baskets(state: &AppState, user: &AuthUser) -> AppResult<Vec<AdminBasket>> {
    ensure_staff(user)?;
    let baskets = Baskets::find()
        .order_by_asc(BasketCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(AdminBasket::from)
        .collect();
    Ok(baskets)
}

pub async fn create_basket(
    state: &AppState,
    user: &AuthUser,
    payload: CreateBasketRequest,
) -> AppResult<AdminBasket> {
    ensure_staff(user)?;
    let raw = required("user", &payload.user)?;

    let mut errors = FieldErrors::new();
    let owner = resolve_reference::<Users, _>(&state.orm, "user", raw, &mut errors).await?;
    if let Some(owner) = owner {
        let taken = Baskets::find()
            .filter(BasketCol::UserId.eq(owner))
            .one(&state.orm)
            .await?;
        if taken.is_some() {
            errors.add("user", "basket with this user already exists.");
        }
    }
    errors.into_result()?;

    let Some(owner) = owner else {
        return Err(AppError::Internal(anyhow::anyhow!(
            "basket owner was not resolved"
        )));
    };

    let basket = BasketActive {
        user_id: Set(owner),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(basket_id = basket.id, owner, actor = user.user_id, "basket created");
    Ok(basket.into())
}

/// Delete a basket and everything in it.
pub async fn delete_basket(state: &AppState, user: &AuthUser, id: i32) -> AppResult<()> {
    ensure_staff(user)?;
    let txn = state.orm.begin().await?;

    let items = BasketItems::delete_many()
        .filter(BasketItemCol::BasketId.eq(id))
        .exec(&txn)
        .await?;
    let result = Baskets::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    txn.commit().await?;

    tracing::info!(
        basket_id = id,
        basket_items = items.rows_affected,
        actor = user.user_id,
        "basket deleted"
    );
    Ok(())
}

pub async fn list_basket_items(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<Vec<BasketItemRepr>> {
    ensure_staff(user)?;
    let items = BasketItems::find()
        .order_by_asc(BasketItemCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(BasketItemRepr::from)
        .collect();
    Ok(items)
}

pub async fn create_user(
    state: &AppState,
    user: &AuthUser,
    payload: CreateUserRequest,
) -> AppResult<AdminUser> {
    ensure_staff(user)?;
    let username = required("username", &payload.username)?;
    let password = required("password", &payload.password)?;
    let created =
        auth_service::register_user(&state.orm, username, password, payload.is_staff).await?;
    Ok(created.into())
}
