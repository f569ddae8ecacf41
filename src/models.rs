//! Wire representations. Each one enumerates the fields it exposes; the entity
//! models never reach a response directly.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::{basket_items, baskets, manufacturers, users, watches};

pub const ITEM_ADDED: &str = "Item was added to cart";

/// Public catalog shape of a watch.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WatchRepr {
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "1999.00")]
    pub price: Decimal,
}

impl From<watches::Model> for WatchRepr {
    fn from(model: watches::Model) -> Self {
        Self {
            name: model.name,
            description: model.description,
            price: money(model.price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ManufacturerRepr {
    pub id: i32,
    pub name: String,
    pub watches: Vec<WatchRepr>,
}

impl ManufacturerRepr {
    pub fn new(model: manufacturers::Model, watches: Vec<watches::Model>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            watches: watches.into_iter().map(WatchRepr::from).collect(),
        }
    }
}

/// Body of the `watches` action on a manufacturer.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ManufacturerWatches {
    pub name: String,
    pub watches: Vec<WatchRepr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BasketItemRepr {
    pub id: i32,
    pub product: i32,
    pub basket: i32,
    pub quantity: i32,
}

impl From<basket_items::Model> for BasketItemRepr {
    fn from(model: basket_items::Model) -> Self {
        Self {
            id: model.id,
            product: model.product_id,
            basket: model.basket_id,
            quantity: model.quantity,
        }
    }
}

/// Acknowledgement returned instead of the created basket item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CartStatus {
    #[serde(rename = "Status")]
    pub status: String,
}

impl CartStatus {
    pub fn item_added() -> Self {
        Self {
            status: ITEM_ADDED.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenPair {
    pub refresh: String,
    pub access: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccessToken {
    pub access: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdminWatchRow {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "1999.00")]
    pub price: Decimal,
    pub is_active: bool,
}

impl From<watches::Model> for AdminWatchRow {
    fn from(model: watches::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: money(model.price),
            is_active: model.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdminWatch {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub manufacturer: i32,
    #[schema(value_type = String, example = "1999.00")]
    pub price: Decimal,
    pub is_active: bool,
    pub time_created: DateTime<Utc>,
    pub time_updated: DateTime<Utc>,
}

impl From<watches::Model> for AdminWatch {
    fn from(model: watches::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            manufacturer: model.manufacturer_id,
            price: money(model.price),
            is_active: model.is_active,
            time_created: model.time_created.with_timezone(&Utc),
            time_updated: model.time_updated.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdminBasket {
    pub id: i32,
    pub user: i32,
    pub created_at: DateTime<Utc>,
}

impl From<baskets::Model> for AdminBasket {
    fn from(model: baskets::Model) -> Self {
        Self {
            id: model.id,
            user: model.user_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdminUser {
    pub id: i32,
    pub username: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

impl From<users::Model> for AdminUser {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            is_staff: model.is_staff,
            is_active: model.is_active,
            date_joined: model.date_joined.with_timezone(&Utc),
        }
    }
}

/// Render a stored price with exactly two fraction digits, rounding half away from zero.
pub fn money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
