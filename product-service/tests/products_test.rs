use axum::http::StatusCode;

mod common;
use common::{sample_product, TestApp};

#[tokio::test]
async fn create_then_get_returns_the_product_with_its_id() {
    let app = TestApp::spawn().await;

    let response = app.create_product(&sample_product()).await;
    assert_eq!(StatusCode::CREATED, response.status());

    let created: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(created["name"], "Band");
    assert_eq!(created["price"], 10.0);
    assert_eq!(created["category"], "accessories");
    assert_eq!(created["description"], "resistance band");
    assert_eq!(created["images"], serde_json::json!([]));
    assert_eq!(created["stock"], 50);

    let id = created["id"].as_str().expect("id missing from response");

    let response = app.get_product(id).await;
    assert_eq!(StatusCode::OK, response.status());

    let fetched: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_returns_all_created_products() {
    let app = TestApp::spawn().await;

    assert!(app.list_products().await.is_empty());

    app.create_product(&sample_product()).await;
    let mut second = sample_product();
    second["name"] = "Kettlebell".into();
    app.create_product(&second).await;

    let products = app.list_products().await;
    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let app = TestApp::spawn().await;

    // Well-formed but never issued.
    let response = app.get_product("000000000000000000000000").await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn create_with_missing_field_returns_400_and_persists_nothing() {
    let app = TestApp::spawn().await;

    let mut body = sample_product();
    body.as_object_mut().unwrap().remove("stock");

    let response = app.create_product(&body).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let error: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(error["message"].is_string());

    assert!(app.list_products().await.is_empty());
}

#[tokio::test]
async fn create_with_empty_name_returns_400() {
    let app = TestApp::spawn().await;

    let mut body = sample_product();
    body["name"] = "".into();

    let response = app.create_product(&body).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn update_replaces_every_field_and_keeps_the_id() {
    let app = TestApp::spawn().await;

    let created: serde_json::Value = app
        .create_product(&sample_product())
        .await
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = created["id"].as_str().unwrap().to_string();

    let replacement = serde_json::json!({
        "name": "Heavy band",
        "price": 14.5,
        "category": "strength",
        "description": "heavy resistance band",
        "images": ["bands/heavy.jpg"],
        "stock": 12
    });

    let response = app
        .client
        .put(format!("{}/api/products/{}", app.address, id))
        .json(&replacement)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, response.status());

    let updated: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "Heavy band");
    assert_eq!(updated["price"], 14.5);
    assert_eq!(updated["category"], "strength");
    assert_eq!(updated["description"], "heavy resistance band");
    assert_eq!(updated["images"], serde_json::json!(["bands/heavy.jpg"]));
    assert_eq!(updated["stock"], 12);

    // The replacement is persisted, not just echoed.
    let fetched: serde_json::Value = app.get_product(&id).await.json().await.unwrap();
    assert_eq!(fetched["stock"], 12);
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .put(format!("{}/api/products/{}", app.address, "missing-id"))
        .json(&sample_product())
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn update_with_invalid_body_returns_400() {
    let app = TestApp::spawn().await;

    let created: serde_json::Value = app
        .create_product(&sample_product())
        .await
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = created["id"].as_str().unwrap();

    let response = app
        .client
        .put(format!("{}/api/products/{}", app.address, id))
        .json(&serde_json::json!({ "name": "Band" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = TestApp::spawn().await;

    let created: serde_json::Value = app
        .create_product(&sample_product())
        .await
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = created["id"].as_str().unwrap();

    let response = app
        .client
        .delete(format!("{}/api/products/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Product removed");

    let response = app.get_product(id).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn delete_unknown_id_returns_404() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .delete(format!("{}/api/products/{}", app.address, "missing-id"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Product not found");
}
