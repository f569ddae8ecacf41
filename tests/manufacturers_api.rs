mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn writes_require_a_token() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, body) = app
        .request(Method::POST, "/api/v1/manufacturers/", Some(json!({ "name": "Casio" })), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({ "detail": "Authentication credentials were not provided." })
    );

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/manufacturers/",
            Some(json!({ "name": "Casio" })),
            Some("not-a-jwt"),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "token_not_valid");

    let (status, _) = app.get("/api/v1/manufacturers/").await;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn create_update_and_read_back() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let (_, token) = app.user_token("editor").await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/manufacturers/",
            Some(json!({ "name": "  Casio " })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "name": "Casio", "watches": [] }));

    app.seed_watch(1, "Casio F-91W", "19.99").await?;

    let (status, body) = app
        .request(
            Method::PATCH,
            "/api/v1/manufacturers/1/",
            Some(json!({ "name": "Casio Computer" })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Casio Computer");
    assert_eq!(body["watches"][0]["name"], "Casio F-91W");

    let (status, body) = app
        .request(Method::PUT, "/api/v1/manufacturers/1/", Some(json!({})), Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "name": ["This field is required."] }));

    let (status, body) = app.get("/api/v1/manufacturers/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Casio Computer",
            "watches": [{
                "name": "Casio F-91W",
                "description": "Casio F-91W description",
                "price": "19.99"
            }]
        })
    );
    Ok(())
}

#[tokio::test]
async fn blank_and_long_names_are_rejected() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let (_, token) = app.user_token("editor").await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/manufacturers/",
            Some(json!({ "name": "   " })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "name": ["This field may not be blank."] }));

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/manufacturers/",
            Some(json!({ "name": "x".repeat(256) })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "name": ["Ensure this field has no more than 255 characters."] })
    );
    Ok(())
}

#[tokio::test]
async fn watches_action_lists_name_and_watches() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let apple = app.seed_manufacturer("Apple").await?;
    let casio = app.seed_manufacturer("Casio").await?;
    app.seed_watch(apple, "Apple Watch SE", "249").await?;
    app.seed_watch(casio, "Casio F-91W", "19.99").await?;
    app.seed_watch(apple, "Apple Watch Ultra", "799").await?;

    let (status, body) = app.get(&format!("/api/v1/manufacturers/{apple}/watches/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Apple");
    let names: Vec<_> = body["watches"]
        .as_array()
        .expect("watches")
        .iter()
        .map(|watch| watch["name"].clone())
        .collect();
    assert_eq!(names, vec![json!("Apple Watch SE"), json!("Apple Watch Ultra")]);

    let (_, body) = app.get("/api/v1/manufacturers/").await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[1]["watches"][0]["name"], "Casio F-91W");

    let (status, _) = app.get("/api/v1/manufacturers/42/watches/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_cascades_to_watches_and_basket_items() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let (user_id, token) = app.user_token("shopper").await?;
    let basket = app.seed_basket(user_id).await?;
    let apple = app.seed_manufacturer("Apple").await?;
    let casio = app.seed_manufacturer("Casio").await?;
    let ultra = app.seed_watch(apple, "Apple Watch Ultra", "799").await?;
    let f91w = app.seed_watch(casio, "Casio F-91W", "19.99").await?;
    let doomed = app.seed_item(basket, ultra, 1).await?;
    let kept = app.seed_item(basket, f91w, 2).await?;

    let (status, body) = app
        .request(
            Method::DELETE,
            &format!("/api/v1/manufacturers/{apple}/"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _) = app.get(&format!("/api/v1/watch/{ultra}/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get(&format!("/api/v1/basket/{doomed}/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = app.get(&format!("/api/v1/basket/{kept}/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 2);

    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/v1/manufacturers/{apple}/"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
