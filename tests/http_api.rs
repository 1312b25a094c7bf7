mod common;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use storefront_api::routes::create_app;
use tower::ServiceExt;

use common::setup_state;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_raw(app, method, uri, body.map(|value| value.to_string())).await
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

async fn app() -> anyhow::Result<Router> {
    Ok(create_app(setup_state().await?))
}

#[tokio::test]
async fn health_and_fallback() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Message": "Health check", "Data": { "status": "ok" } }));

    let (status, body) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["Message"], "Not Found");
    Ok(())
}

// Wishlist "Birthday" + one product: add, duplicate add, remove twice, then delete.
#[tokio::test]
async fn wishlist_membership_over_http() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Toys" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = body["Data"]["id"].as_i64().expect("category id");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "Kite", "price": 1999, "category_id": category_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Message"], "Product created successfully.");
    let product_id = body["Data"]["id"].as_i64().expect("product id");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/wishlists",
        Some(json!({ "name": "Birthday" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let member_uri = format!("/api/wishlists/Birthday/products/{product_id}");

    let (status, body) = send(&app, Method::POST, &member_uri, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Message"], "Product added to wishlist successfully.");
    assert_eq!(body["Data"]["product_id"], product_id);

    let (status, body) = send(&app, Method::POST, &member_uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "Message": "Product is already in the wishlist." }));

    let (status, body) = send(&app, Method::GET, "/api/wishlists/Birthday", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Data"]["products"][0]["name"], "Kite");

    let (status, _) = send(&app, Method::DELETE, &member_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, Method::DELETE, &member_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Data"]["products"], json!([]));

    let (status, _) = send(&app, Method::DELETE, "/api/wishlists/Birthday", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/api/wishlists/Birthday", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["Message"], "Wishlist 'Birthday' not found.");
    Ok(())
}

#[tokio::test]
async fn wishlist_names_are_percent_decoded() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/wishlists",
        Some(json!({ "name": "Summer Sale" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, "/api/wishlists/Summer%20Sale", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Data"]["name"], "Summer Sale");
    Ok(())
}

#[tokio::test]
async fn status_codes_follow_one_convention() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Data"], json!([]));

    let (status, _) = send(&app, Method::GET, "/api/products/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/categories/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "Orphan", "price": 1, "category_id": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Category with ID 42 not found");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Toys" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = body["Data"]["id"].as_i64().expect("category id");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Toys" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/categories/{category_id}"),
        Some(json!({ "id": category_id + 1, "name": "Games" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["Message"]
            .as_str()
            .expect("message")
            .starts_with("Category ID mismatch")
    );

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/wishlists/Nope/products/1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_requests_use_the_error_envelope() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(&app, Method::GET, "/api/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["Message"].as_str().expect("message");
    assert!(message.contains("abc"), "got {message}");

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/api/wishlists/Birthday/products/five",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["Message"].is_string());

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/api/categories",
        Some("{bad".to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["Message"].as_str().expect("message");
    assert!(message.contains("JSON"), "got {message}");

    // Well-formed JSON with a missing field is still a client error.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "Kite" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["Message"].is_string());
    Ok(())
}
