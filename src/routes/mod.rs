use axum::{
    Router,
    response::{IntoResponse, Redirect},
    routing::get,
};

use crate::{error::AppError, state::AppState};

pub mod admin;
pub mod auth;
pub mod basket;
pub mod doc;
pub mod health;
pub mod manufacturers;
pub mod params;
pub mod watches;

// Build the versioned API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(watches::router())
        .merge(manufacturers::router())
        .merge(basket::router())
        .route("/drf-auth", get(browsable_login))
}

/// The whole application with its state bound, ready for middleware layers.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", create_api_router())
        .nest("/admin", admin::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

// The interactive API documentation stands in for a browsable login page.
async fn browsable_login() -> Redirect {
    Redirect::temporary("/docs")
}

async fn not_found() -> impl IntoResponse {
    AppError::NotFound
}
