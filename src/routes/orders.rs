use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{NewOrder, NewOrderItem, Order, OrderStatus, OrderWithItems},
    state::AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: Option<i32>,
    pub store_id: i32,
    pub order_number: String,
    pub total_amount: Decimal,
    pub total_tax: Decimal,
    pub total_savings: Decimal,
    pub total_weight: Decimal,
    pub order_date: String,
    pub status: OrderStatus,
    pub items: Vec<CreateOrderItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub product_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/{id}", get(get_order))
        .route("/user/{user_id}", get(list_user_orders))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Invalid order data"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let Json(payload) = payload?;

    let order = state.storage.create_order(NewOrder {
        user_id: payload.user_id,
        store_id: payload.store_id,
        order_number: payload.order_number,
        total_amount: payload.total_amount,
        total_tax: payload.total_tax,
        total_savings: payload.total_savings,
        total_weight: payload.total_weight,
        order_date: payload.order_date,
        status: payload.status,
    });

    for item in payload.items {
        state.storage.create_order_item(NewOrderItem {
            order_id: order.id,
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price,
        });
    }

    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with its items", body = OrderWithItems),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<OrderWithItems>> {
    let order = state.storage.order(id).ok_or(AppError::NotFound("Order"))?;
    let items = state.storage.order_items(order.id);
    Ok(Json(OrderWithItems { order, items }))
}

#[utoipa::path(
    get,
    path = "/api/orders/user/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Orders for a user", body = Vec<Order>),
        (status = 400, description = "Non-numeric id"),
    ),
    tag = "Orders"
)]
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Json<Vec<Order>> {
    Json(state.storage.user_orders(user_id))
}
