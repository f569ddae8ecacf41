use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, LoaderTrait, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Set, TransactionTrait,
};

use crate::{
    dto::manufacturers::{ManufacturerPatch, ManufacturerRequest},
    entity::{
        basket_items::{Column as BasketItemCol, Entity as BasketItems},
        manufacturers::{
            ActiveModel, Column as ManufacturerCol, Entity as Manufacturers,
            Model as ManufacturerModel,
        },
        watches::{Column as WatchCol, Entity as Watches, Model as WatchModel},
    },
    error::{AppError, AppResult},
    middleware::auth::WriteAccess,
    models::{ManufacturerRepr, ManufacturerWatches},
    response::{Listed, PageRequest},
    services::{fetch_listing, required},
    state::AppState,
};

pub async fn list_manufacturers(
    state: &AppState,
    page: Option<PageRequest>,
) -> AppResult<Listed<ManufacturerRepr>> {
    let finder = Manufacturers::find().order_by_asc(ManufacturerCol::Id);
    let Listed { items, page } = fetch_listing(finder, &state.orm, page).await?;

    let watches = items
        .load_many(Watches::find().order_by_asc(WatchCol::Id), &state.orm)
        .await?;

    let items = items
        .into_iter()
        .zip(watches)
        .map(|(manufacturer, watches)| ManufacturerRepr::new(manufacturer, watches))
        .collect();
    Ok(Listed { items, page })
}

pub async fn get_manufacturer(state: &AppState, id: i32) -> AppResult<ManufacturerRepr> {
    let manufacturer = find(state, id).await?;
    let watches = watches_of(state, &manufacturer).await?;
    Ok(ManufacturerRepr::new(manufacturer, watches))
}

pub async fn create_manufacturer(
    state: &AppState,
    access: &WriteAccess,
    payload: ManufacturerRequest,
) -> AppResult<ManufacturerRepr> {
    let name = required("name", &payload.name)?.trim().to_string();
    let now = Utc::now();
    let manufacturer = ActiveModel {
        name: Set(name),
        time_created: Set(now.into()),
        time_updated: Set(now.into()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        manufacturer_id = manufacturer.id,
        actor = ?access.user_id(),
        "manufacturer created"
    );
    Ok(ManufacturerRepr::new(manufacturer, Vec::new()))
}

pub async fn update_manufacturer(
    state: &AppState,
    access: &WriteAccess,
    id: i32,
    payload: ManufacturerRequest,
) -> AppResult<ManufacturerRepr> {
    let patch = ManufacturerPatch {
        name: Some(required("name", &payload.name)?.clone()),
    };
    partial_update_manufacturer(state, access, id, patch).await
}

pub async fn partial_update_manufacturer(
    state: &AppState,
    access: &WriteAccess,
    id: i32,
    payload: ManufacturerPatch,
) -> AppResult<ManufacturerRepr> {
    let existing = find(state, id).await?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    active.time_updated = Set(Utc::now().into());
    let manufacturer = active.update(&state.orm).await?;

    tracing::info!(
        manufacturer_id = manufacturer.id,
        actor = ?access.user_id(),
        "manufacturer updated"
    );
    let watches = watches_of(state, &manufacturer).await?;
    Ok(ManufacturerRepr::new(manufacturer, watches))
}

/// Delete a manufacturer together with its watches and every basket item that
/// references one of them.
pub async fn delete_manufacturer(
    state: &AppState,
    access: &WriteAccess,
    id: i32,
) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    if Manufacturers::find_by_id(id).one(&txn).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let owned_watches = Watches::find()
        .select_only()
        .column(WatchCol::Id)
        .filter(WatchCol::ManufacturerId.eq(id))
        .into_query();
    let items = BasketItems::delete_many()
        .filter(BasketItemCol::ProductId.in_subquery(owned_watches))
        .exec(&txn)
        .await?;
    let watches = Watches::delete_many()
        .filter(WatchCol::ManufacturerId.eq(id))
        .exec(&txn)
        .await?;
    Manufacturers::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        manufacturer_id = id,
        watches = watches.rows_affected,
        basket_items = items.rows_affected,
        actor = ?access.user_id(),
        "manufacturer deleted"
    );
    Ok(())
}

/// The `watches` action: a manufacturer's name and its catalog entries.
pub async fn manufacturer_watches(state: &AppState, id: i32) -> AppResult<ManufacturerWatches> {
    let manufacturer = find(state, id).await?;
    let watches = watches_of(state, &manufacturer).await?;
    Ok(ManufacturerWatches {
        name: manufacturer.name,
        watches: watches.into_iter().map(Into::into).collect(),
    })
}

async fn find(state: &AppState, id: i32) -> AppResult<ManufacturerModel> {
    Manufacturers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}

async fn watches_of(
    state: &AppState,
    manufacturer: &ManufacturerModel,
) -> AppResult<Vec<WatchModel>> {
    Ok(manufacturer
        .find_related(Watches)
        .order_by_asc(WatchCol::Id)
        .all(&state.orm)
        .await?)
}
