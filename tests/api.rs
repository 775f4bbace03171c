use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use smartcart::{routes::create_api_router, seed, state::AppState, storage::MemStorage};

fn app() -> Router {
    let storage = MemStorage::shared();
    seed::demo_data(storage.as_ref()).expect("seed demo data");
    Router::new()
        .nest("/api", create_api_router())
        .with_state(AppState { storage })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(app, request).await
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, bytes.to_vec())
}

fn parse(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("json body")
}

#[tokio::test]
async fn barcode_lookup_returns_the_seeded_product() {
    let (status, body) = get(app(), "/api/products/barcode/7896080900021").await;
    assert_eq!(status, StatusCode::OK);

    let product = parse(&body);
    assert_eq!(product["name"], "Organic Broccoli");
    assert_eq!(product["category"], "produce");
    assert_eq!(product["price"], json!(2.49));
}

#[tokio::test]
async fn unknown_barcode_is_not_found() {
    let (status, body) = get(app(), "/api/products/barcode/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body)["message"], "Product not found");
}

#[tokio::test]
async fn list_products_returns_the_whole_catalog() {
    let (status, body) = get(app(), "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body).as_array().expect("array").len(), 8);
}

#[tokio::test]
async fn category_lookup_filters_products() {
    let (status, body) = get(app(), "/api/products/category/produce").await;
    assert_eq!(status, StatusCode::OK);

    let products = parse(&body);
    let products = products.as_array().expect("array");
    assert_eq!(products.len(), 4);
    assert!(products.iter().all(|p| p["category"] == "produce"));
}

#[tokio::test]
async fn recommended_products_come_back_for_a_store() {
    let (status, body) = get(app(), "/api/products/recommended/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body).as_array().expect("array").len(), 3);
}

#[tokio::test]
async fn related_products_share_a_category_and_exclude_the_product() {
    let (status, body) = get(app(), "/api/products/related/1").await;
    assert_eq!(status, StatusCode::OK);

    let products = parse(&body);
    let products = products.as_array().expect("array");
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p["category"] == "produce" && p["id"] != 1));
}

#[tokio::test]
async fn store_lookup_parses_the_layout() {
    let (status, body) = get(app(), "/api/store/1").await;
    assert_eq!(status, StatusCode::OK);

    let store = parse(&body);
    assert_eq!(store["name"], "GreenMart");
    assert_eq!(store["qrCode"], "store:1:GreenMart:Downtown");
    assert_eq!(
        store["layout"]["sections"].as_array().expect("sections").len(),
        5
    );
}

#[tokio::test]
async fn store_lookup_rejects_non_numeric_ids() {
    let (status, _body) = get(app(), "/api/store/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_store_is_not_found() {
    let (status, body) = get(app(), "/api/store/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body)["message"], "Store not found");
}

#[tokio::test]
async fn store_lookup_by_scan_code_works() {
    let (status, body) = get(app(), "/api/store/qr/store:1:GreenMart:Downtown").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["branch"], "Downtown Branch");
}

#[tokio::test]
async fn order_creation_rejects_a_missing_status() {
    let body = json!({
        "storeId": 1,
        "orderNumber": "#0042",
        "totalAmount": 10.25,
        "totalTax": 0.58,
        "totalSavings": 0.80,
        "totalWeight": 2.6,
        "orderDate": "2026-08-06T12:00:00Z",
        "items": [{ "productId": 1, "quantity": 1, "price": 2.49 }]
    });

    let (status, _body) = post_json(app(), "/api/orders", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn created_orders_are_retrievable_with_their_items() {
    let app = app();

    let body = json!({
        "userId": 7,
        "storeId": 1,
        "orderNumber": "#0042",
        "totalAmount": 10.25,
        "totalTax": 0.58,
        "totalSavings": 0.80,
        "totalWeight": 2.6,
        "orderDate": "2026-08-06T12:00:00Z",
        "status": "completed",
        "items": [
            { "productId": 1, "quantity": 1, "price": 2.49 },
            { "productId": 2, "quantity": 2, "price": 3.99 }
        ]
    });

    let (status, created) = post_json(app.clone(), "/api/orders", body).await;
    assert_eq!(status, StatusCode::CREATED);

    let created = parse(&created);
    assert_eq!(created["orderNumber"], "#0042");
    let order_id = created["id"].as_i64().expect("order id");

    let (status, fetched) = get(app.clone(), &format!("/api/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let fetched = parse(&fetched);
    assert_eq!(fetched["status"], "completed");
    assert_eq!(fetched["items"].as_array().expect("items").len(), 2);

    let (status, for_user) = get(app, "/api/orders/user/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&for_user).as_array().expect("orders").len(), 1);
}

#[tokio::test]
async fn unknown_order_is_not_found() {
    let (status, body) = get(app(), "/api/orders/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body)["message"], "Order not found");
}
