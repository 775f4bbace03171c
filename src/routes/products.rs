use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/barcode/{barcode}", get(get_product_by_barcode))
        .route("/category/{category}", get(list_products_by_category))
        .route("/recommended/{store_id}", get(list_recommended_products))
        .route("/related/{product_id}", get(list_related_products))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List all products", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.storage.products())
}

#[utoipa::path(
    get,
    path = "/api/products/barcode/{barcode}",
    params(
        ("barcode" = String, Path, description = "Product barcode")
    ),
    responses(
        (status = 200, description = "Get product by barcode", body = Product),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product_by_barcode(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state
        .storage
        .product_by_barcode(&barcode)
        .ok_or(AppError::NotFound("Product"))?;
    Ok(Json(product))
}

#[utoipa::path(
    get,
    path = "/api/products/category/{category}",
    params(
        ("category" = String, Path, description = "Category label")
    ),
    responses(
        (status = 200, description = "List products in a category", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Product>> {
    Json(state.storage.products_by_category(&category))
}

#[utoipa::path(
    get,
    path = "/api/products/recommended/{store_id}",
    params(
        ("store_id" = i32, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Recommended products for a store", body = Vec<Product>),
        (status = 400, description = "Non-numeric id"),
    ),
    tag = "Products"
)]
pub async fn list_recommended_products(
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
) -> Json<Vec<Product>> {
    Json(state.storage.recommended_products(store_id))
}

#[utoipa::path(
    get,
    path = "/api/products/related/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Products related to one product", body = Vec<Product>),
        (status = 400, description = "Non-numeric id"),
    ),
    tag = "Products"
)]
pub async fn list_related_products(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Json<Vec<Product>> {
    Json(state.storage.related_products(product_id))
}
