use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde_json::Value;

use crate::{
    dto::basket::{BasketItemPatch, BasketItemRequest},
    entity::{
        Baskets, Watches,
        basket_items::{
            ActiveModel, Column as BasketItemCol, Entity as BasketItems,
            Model as BasketItemModel,
        },
    },
    error::{AppError, AppResult, FieldErrors},
    middleware::auth::WriteAccess,
    models::{BasketItemRepr, CartStatus},
    response::{Listed, PageRequest},
    services::{fetch_listing, required, resolve_reference},
    state::AppState,
    validation::integer_value,
};

const DEFAULT_QUANTITY: i32 = 1;

/// Checked column values of a basket item write.
struct ItemFields {
    product: Option<i32>,
    basket: Option<i32>,
    quantity: Option<i32>,
}

pub async fn list_items(
    state: &AppState,
    page: Option<PageRequest>,
) -> AppResult<Listed<BasketItemRepr>> {
    let finder = BasketItems::find().order_by_asc(BasketItemCol::Id);
    let listed = fetch_listing(finder, &state.orm, page).await?;
    Ok(listed.map(BasketItemRepr::from))
}

pub async fn get_item(state: &AppState, id: i32) -> AppResult<BasketItemRepr> {
    Ok(find(state, id).await?.into())
}

/// Put a watch into a basket. Every call stores a new row, even when the basket
/// already holds the same watch.
pub async fn add_item(
    state: &AppState,
    access: &WriteAccess,
    payload: BasketItemRequest,
) -> AppResult<CartStatus> {
    let fields = check_fields(
        state,
        Some(required("product", &payload.product)?),
        Some(required("basket", &payload.basket)?),
        payload.quantity.as_ref(),
    )
    .await?;

    let (Some(product_id), Some(basket_id)) = (fields.product, fields.basket) else {
        return Err(AppError::Internal(anyhow::anyhow!(
            "basket item references were not resolved"
        )));
    };

    let item = ActiveModel {
        product_id: Set(product_id),
        basket_id: Set(basket_id),
        quantity: Set(fields.quantity.unwrap_or(DEFAULT_QUANTITY)),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        basket_item_id = item.id,
        basket_id = item.basket_id,
        product_id = item.product_id,
        quantity = item.quantity,
        actor = ?access.user_id(),
        "item added to basket"
    );
    Ok(CartStatus::item_added())
}

pub async fn update_item(
    state: &AppState,
    access: &WriteAccess,
    id: i32,
    payload: BasketItemRequest,
) -> AppResult<BasketItemRepr> {
    let patch = BasketItemPatch {
        product: Some(required("product", &payload.product)?.clone()),
        basket: Some(required("basket", &payload.basket)?.clone()),
        quantity: payload.quantity,
    };
    partial_update_item(state, access, id, patch).await
}

pub async fn partial_update_item(
    state: &AppState,
    access: &WriteAccess,
    id: i32,
    payload: BasketItemPatch,
) -> AppResult<BasketItemRepr> {
    let existing = find(state, id).await?;
    let fields = check_fields(
        state,
        payload.product.as_ref(),
        payload.basket.as_ref(),
        payload.quantity.as_ref(),
    )
    .await?;

    let mut active: ActiveModel = existing.into();
    if let Some(product_id) = fields.product {
        active.product_id = Set(product_id);
    }
    if let Some(basket_id) = fields.basket {
        active.basket_id = Set(basket_id);
    }
    if let Some(quantity) = fields.quantity {
        active.quantity = Set(quantity);
    }
    let item = active.update(&state.orm).await?;

    tracing::info!(basket_item_id = item.id, actor = ?access.user_id(), "basket item updated");
    Ok(item.into())
}

pub async fn delete_item(state: &AppState, access: &WriteAccess, id: i32) -> AppResult<()> {
    let result = BasketItems::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(basket_item_id = id, actor = ?access.user_id(), "basket item deleted");
    Ok(())
}

async fn find(state: &AppState, id: i32) -> AppResult<BasketItemModel> {
    BasketItems::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}

/// Resolve the references and quantity present in a write, reporting every
/// missing row at once.
async fn check_fields(
    state: &AppState,
    product: Option<&Value>,
    basket: Option<&Value>,
    quantity: Option<&Value>,
) -> AppResult<ItemFields> {
    let mut errors = FieldErrors::new();

    let product = match product {
        Some(raw) => resolve_reference::<Watches, _>(&state.orm, "product", raw, &mut errors).await?,
        None => None,
    };
    let basket = match basket {
        Some(raw) => resolve_reference::<Baskets, _>(&state.orm, "basket", raw, &mut errors).await?,
        None => None,
    };
    errors.into_result()?;

    // The quantity validator has already bounded the value to the column range.
    let quantity = quantity
        .and_then(integer_value)
        .and_then(|value| i32::try_from(value).ok());

    Ok(ItemFields {
        product,
        basket,
        quantity,
    })
}
