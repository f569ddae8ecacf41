#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tower::ServiceExt;
use watch_catalog::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::auth::TokenType,
    entity::{basket_items, baskets, manufacturers, watches},
    routes::create_app,
    services::auth_service,
    state::AppState,
};

pub const PASSWORD: &str = "correct horse battery";

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: "test-secret".into(),
        access_token_ttl_secs: 300,
        refresh_token_ttl_secs: 86_400,
        page_size: None,
        write_requires_auth: true,
    }
}

/// The application wired to a fresh in-memory database.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(configure: impl FnOnce(&mut AppConfig)) -> anyhow::Result<Self> {
        let mut config = test_config();
        configure(&mut config);
        let orm = create_orm_conn(&config.database_url).await?;
        run_migrations(&orm).await?;
        let state = AppState::new(orm, config);
        let router = create_app(state.clone());
        Ok(Self { state, router })
    }

    /// Send a request and return the status with the decoded JSON body (`Null` when empty).
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn user_token(&self, username: &str) -> anyhow::Result<(i32, String)> {
        self.token_for(username, false).await
    }

    pub async fn staff_token(&self, username: &str) -> anyhow::Result<(i32, String)> {
        self.token_for(username, true).await
    }

    async fn token_for(&self, username: &str, is_staff: bool) -> anyhow::Result<(i32, String)> {
        let user = auth_service::register_user(&self.state.orm, username, PASSWORD, is_staff)
            .await
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let token = auth_service::issue_token(&self.state.config, user.id, TokenType::Access)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        Ok((user.id, token))
    }

    pub async fn seed_manufacturer(&self, name: &str) -> anyhow::Result<i32> {
        let now = Utc::now();
        let manufacturer = manufacturers::ActiveModel {
            name: Set(name.to_string()),
            time_created: Set(now.into()),
            time_updated: Set(now.into()),
            ..Default::default()
        }
        .insert(&self.state.orm)
        .await?;
        Ok(manufacturer.id)
    }

    pub async fn seed_watch(
        &self,
        manufacturer_id: i32,
        name: &str,
        price: &str,
    ) -> anyhow::Result<i32> {
        let now = Utc::now();
        let watch = watches::ActiveModel {
            name: Set(name.to_string()),
            description: Set(format!("{name} description")),
            manufacturer_id: Set(manufacturer_id),
            price: Set(price.parse()?),
            time_created: Set(now.into()),
            time_updated: Set(now.into()),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(&self.state.orm)
        .await?;
        Ok(watch.id)
    }

    pub async fn seed_basket(&self, user_id: i32) -> anyhow::Result<i32> {
        let basket = baskets::ActiveModel {
            user_id: Set(user_id),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .insert(&self.state.orm)
        .await?;
        Ok(basket.id)
    }

    pub async fn seed_item(&self, basket_id: i32, product_id: i32, quantity: i32) -> anyhow::Result<i32> {
        let item = basket_items::ActiveModel {
            basket_id: Set(basket_id),
            product_id: Set(product_id),
            quantity: Set(quantity),
            ..Default::default()
        }
        .insert(&self.state.orm)
        .await?;
        Ok(item.id)
    }
}
