use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{CreateBasketRequest, CreateUserRequest, CreateWatchRequest, UpdateWatchRequest},
        auth::{TokenObtainRequest, TokenRefreshRequest, TokenVerifyRequest},
        basket::{BasketItemPatch, BasketItemRequest},
        manufacturers::{ManufacturerPatch, ManufacturerRequest},
    },
    models::{
        AccessToken, AdminBasket, AdminUser, AdminWatch, AdminWatchRow, BasketItemRepr, CartStatus,
        ManufacturerRepr, ManufacturerWatches, TokenPair, WatchRepr,
    },
    routes::{admin, auth, basket, health, manufacturers, params, watches},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::obtain_token,
        auth::refresh_token,
        auth::verify_token,
        watches::list_watches,
        watches::get_watch,
        manufacturers::list_manufacturers,
        manufacturers::create_manufacturer,
        manufacturers::get_manufacturer,
        manufacturers::update_manufacturer,
        manufacturers::partial_update_manufacturer,
        manufacturers::delete_manufacturer,
        manufacturers::manufacturer_watches,
        basket::list_items,
        basket::add_to_cart,
        basket::get_item,
        basket::update_item,
        basket::partial_update_item,
        basket::delete_item,
        admin::list_watches,
        admin::create_watch,
        admin::update_watch,
        admin::delete_watch,
        admin::list_baskets,
        admin::create_basket,
        admin::delete_basket,
        admin::list_basket_items,
        admin::create_user
    ),
    components(
        schemas(
            health::HealthData,
            WatchRepr,
            ManufacturerRepr,
            ManufacturerWatches,
            BasketItemRepr,
            CartStatus,
            TokenPair,
            AccessToken,
            AdminWatchRow,
            AdminWatch,
            AdminBasket,
            AdminUser,
            ManufacturerRequest,
            ManufacturerPatch,
            BasketItemRequest,
            BasketItemPatch,
            TokenObtainRequest,
            TokenRefreshRequest,
            TokenVerifyRequest,
            CreateWatchRequest,
            UpdateWatchRequest,
            CreateBasketRequest,
            CreateUserRequest,
            params::Pagination,
            params::WatchQuery
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Token endpoints"),
        (name = "Watches", description = "Read-only watch catalog"),
        (name = "Manufacturers", description = "Manufacturer endpoints"),
        (name = "Basket", description = "Basket item endpoints"),
        (name = "Admin", description = "Staff-only management endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
