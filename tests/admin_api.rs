mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use watch_catalog::{
    dto::admin::CreateBasketRequest,
    middleware::auth::AuthUser,
    services::admin_service,
};

use common::{PASSWORD, TestApp};

#[tokio::test]
async fn admin_routes_are_staff_only() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let (_, customer) = app.user_token("customer").await?;

    let (status, _) = app.get("/admin/watches/").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .request(Method::GET, "/admin/watches/", None, Some(&customer))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        json!({ "detail": "You do not have permission to perform this action." })
    );
    Ok(())
}

#[tokio::test]
async fn watch_management() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let (_, staff) = app.staff_token("admin").await?;
    app.seed_manufacturer("Generic").await?;
    let seiko = app.seed_manufacturer("Seiko").await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/admin/watches/",
            Some(json!({ "name": "Field watch", "description": "Plain dial", "price": "49.90" })),
            Some(&staff),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["manufacturer"], 1);
    assert_eq!(body["price"], "49.90");
    assert_eq!(body["is_active"], true);
    let id = body["id"].as_i64().expect("id");

    let (status, body) = app
        .request(
            Method::POST,
            "/admin/watches/",
            Some(json!({
                "name": "Ghost",
                "description": "No maker",
                "price": "10",
                "manufacturer": 99
            })),
            Some(&staff),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "manufacturer": ["Invalid pk \"99\" - object does not exist."] })
    );

    let (status, body) = app
        .request(
            Method::POST,
            "/admin/watches/",
            Some(json!({ "name": "Precise", "description": "x", "price": "1.999" })),
            Some(&staff),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "price": ["Ensure that there are no more than 2 decimal places."] })
    );

    let (status, body) = app
        .request(
            Method::PATCH,
            &format!("/admin/watches/{id}/"),
            Some(json!({ "manufacturer": seiko, "is_active": false })),
            Some(&staff),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["manufacturer"], seiko);
    assert_eq!(body["is_active"], false);

    let (_, body) = app
        .request(Method::GET, "/admin/watches/", None, Some(&staff))
        .await;
    assert_eq!(
        body,
        json!([{ "id": id, "name": "Field watch", "price": "49.90", "is_active": false }])
    );

    // Inactive watches stay in the public catalog.
    let (_, body) = app.get("/api/v1/watch/").await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn deleting_a_watch_removes_its_basket_items() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let (staff_id, staff) = app.staff_token("admin").await?;
    let basket = app.seed_basket(staff_id).await?;
    let maker = app.seed_manufacturer("Casio").await?;
    let watch = app.seed_watch(maker, "Casio F-91W", "19.99").await?;
    app.seed_item(basket, watch, 2).await?;

    let (status, _) = app
        .request(Method::DELETE, &format!("/admin/watches/{watch}/"), None, Some(&staff))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app
        .request(Method::GET, "/admin/basket-items/", None, Some(&staff))
        .await;
    assert_eq!(body, json!([]));

    let (status, _) = app
        .request(Method::DELETE, &format!("/admin/watches/{watch}/"), None, Some(&staff))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn baskets_are_one_per_user() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let (staff_id, staff) = app.staff_token("admin").await?;
    let (customer_id, _) = app.user_token("customer").await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/admin/baskets/",
            Some(json!({ "user": customer_id })),
            Some(&staff),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"], customer_id);
    let basket = body["id"].as_i64().expect("id");

    let (status, body) = app
        .request(
            Method::POST,
            "/admin/baskets/",
            Some(json!({ "user": customer_id })),
            Some(&staff),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "user": ["basket with this user already exists."] }));

    let (status, _) = app
        .request(Method::DELETE, &format!("/admin/baskets/{basket}/"), None, Some(&staff))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let admin = AuthUser {
        user_id: staff_id,
        is_staff: true,
    };
    let created = admin_service::create_basket(
        &app.state,
        &admin,
        CreateBasketRequest {
            user: Some(json!(customer_id)),
        },
    )
    .await?;
    assert_eq!(created.user, customer_id);

    let baskets = admin_service::list_baskets(&app.state, &admin).await?;
    assert_eq!(baskets.len(), 1);
    Ok(())
}

#[tokio::test]
async fn staff_can_create_users_who_then_sign_in() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let (_, staff) = app.staff_token("admin").await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/admin/users/",
            Some(json!({ "username": "bob", "password": PASSWORD })),
            Some(&staff),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "bob");
    assert_eq!(body["is_staff"], false);
    assert!(body.get("password_hash").is_none());

    let (status, body) = app
        .request(
            Method::POST,
            "/admin/users/",
            Some(json!({ "username": "bob", "password": "other" })),
            Some(&staff),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "username": ["A user with that username already exists."] })
    );

    let (status, _) = app
        .request(
            Method::POST,
            "/api/v1/token/",
            Some(json!({ "username": "bob", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn prices_round_trip_within_storage_precision() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let (_, staff) = app.staff_token("admin").await?;
    app.seed_manufacturer("Generic").await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/admin/watches/",
            Some(json!({
                "name": "Grand Complication",
                "description": "Tourbillon",
                "price": "1234567890123.45"
            })),
            Some(&staff),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], "1234567890123.45");
    let id = body["id"].as_i64().expect("id");

    let (_, body) = app.get(&format!("/api/v1/watch/{id}/")).await;
    assert_eq!(body["price"], "1234567890123.45");

    let wide = json!({
        "name": "Too precise",
        "description": "x",
        "price": "123456789012345678.99"
    });
    let (status, body) = app
        .request(Method::POST, "/admin/watches/", Some(wide), Some(&staff))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "price": ["Ensure that there are no more than 15 digits in total."] })
    );

    let (status, body) = app
        .request(
            Method::PATCH,
            &format!("/admin/watches/{id}/"),
            Some(json!({ "price": "99999999999999.99" })),
            Some(&staff),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("price").is_some());

    let (_, body) = app.get(&format!("/api/v1/watch/{id}/")).await;
    assert_eq!(body["price"], "1234567890123.45");
    Ok(())
}
