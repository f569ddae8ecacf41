mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

struct Fixture {
    app: TestApp,
    token: String,
    basket: i32,
    watch: i32,
}

async fn fixture() -> anyhow::Result<Fixture> {
    let app = TestApp::new().await?;
    let (user_id, token) = app.user_token("shopper").await?;
    let basket = app.seed_basket(user_id).await?;
    let maker = app.seed_manufacturer("Seiko").await?;
    let watch = app.seed_watch(maker, "Seiko 5", "295").await?;
    Ok(Fixture {
        app,
        token,
        basket,
        watch,
    })
}

#[tokio::test]
async fn adding_returns_status_payload() -> anyhow::Result<()> {
    let Fixture {
        app,
        token,
        basket,
        watch,
    } = fixture().await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "product": watch, "basket": basket, "quantity": 3 })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Status": "Item was added to cart" }));

    let (status, body) = app.get("/api/v1/basket/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "product": watch, "basket": basket, "quantity": 3 }])
    );
    Ok(())
}

#[tokio::test]
async fn repeated_adds_create_separate_rows() -> anyhow::Result<()> {
    let Fixture {
        app,
        token,
        basket,
        watch,
    } = fixture().await?;

    for _ in 0..2 {
        let (status, _) = app
            .request(
                Method::POST,
                "/api/v1/basket/",
                Some(json!({ "product": watch.to_string(), "basket": basket })),
                Some(&token),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app.get("/api/v1/basket/").await;
    let items = body.as_array().expect("items");
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item["quantity"] == 1));
    assert_ne!(items[0]["id"], items[1]["id"]);
    Ok(())
}

#[tokio::test]
async fn unknown_references_are_reported_per_field() -> anyhow::Result<()> {
    let Fixture {
        app, token, basket, ..
    } = fixture().await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "product": 999, "basket": basket })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "product": ["Invalid pk \"999\" - object does not exist."] })
    );

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "product": 999, "basket": 999 })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("product").is_some());
    assert!(body.get("basket").is_some());

    let (_, body) = app.get("/api/v1/basket/").await;
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn malformed_fields_are_rejected() -> anyhow::Result<()> {
    let Fixture {
        app,
        token,
        basket,
        watch,
    } = fixture().await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "product": "abc", "basket": basket })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "product": ["Incorrect type. Expected pk value, received str."] })
    );

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "basket": basket })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "product": ["This field is required."] }));

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "product": watch, "basket": basket, "quantity": -1 })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "quantity": ["Ensure this value is greater than or equal to 0."] })
    );

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "product": watch, "basket": basket, "quantity": "many" })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "quantity": ["A valid integer is required."] }));
    Ok(())
}

#[tokio::test]
async fn items_can_be_updated_and_deleted() -> anyhow::Result<()> {
    let Fixture {
        app,
        token,
        basket,
        watch,
    } = fixture().await?;
    let item = app.seed_item(basket, watch, 1).await?;
    let uri = format!("/api/v1/basket/{item}/");

    let (status, body) = app
        .request(Method::PATCH, &uri, Some(json!({ "quantity": 5 })), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": item, "product": watch, "basket": basket, "quantity": 5 })
    );

    let (status, body) = app
        .request(
            Method::PUT,
            &uri,
            Some(json!({ "product": watch, "basket": basket, "quantity": 0 })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 0);

    let (status, _) = app.request(Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.request(Method::DELETE, &uri, None, Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not found." }));
    Ok(())
}

#[tokio::test]
async fn anonymous_writes_when_auth_is_disabled() -> anyhow::Result<()> {
    let app = TestApp::with_config(|config| config.write_requires_auth = false).await?;
    let (user_id, _) = app.user_token("shopper").await?;
    let basket = app.seed_basket(user_id).await?;
    let maker = app.seed_manufacturer("Casio").await?;
    let watch = app.seed_watch(maker, "Casio F-91W", "19.99").await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "product": watch, "basket": basket })),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], "Item was added to cart");

    let (status, _) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "product": watch, "basket": basket })),
            Some("garbage"),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn explicit_nulls_are_rejected() -> anyhow::Result<()> {
    let Fixture {
        app,
        token,
        basket,
        watch,
    } = fixture().await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "product": watch, "basket": basket, "quantity": null })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "quantity": ["This field may not be null."] }));

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/basket/",
            Some(json!({ "product": null, "basket": basket })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "product": ["This field may not be null."] }));

    let item = app.seed_item(basket, watch, 4).await?;
    let (status, body) = app
        .request(
            Method::PATCH,
            &format!("/api/v1/basket/{item}/"),
            Some(json!({ "quantity": null })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "quantity": ["This field may not be null."] }));

    let (_, body) = app.get("/api/v1/basket/").await;
    assert_eq!(
        body,
        json!([{ "id": item, "product": watch, "basket": basket, "quantity": 4 }])
    );
    Ok(())
}
