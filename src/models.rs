use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// Store record as held in storage. `layout` is JSON text describing the
/// floor plan; it is parsed into a [`StoreLayout`] only when served.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub branch: String,
    pub qr_code: String,
    pub layout: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewStore {
    pub name: String,
    pub branch: String,
    pub qr_code: String,
    pub layout: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreLayout {
    pub sections: Vec<LayoutSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LayoutSection {
    pub id: String,
    pub name: String,
    pub color: String,
    pub position: SectionPosition,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct SectionPosition {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub price_per_unit: Option<String>,
    pub unit: Option<String>,
    pub weight: Decimal,
    pub image_url: String,
    /// Percentage discount, 0-100.
    pub discount: Option<i32>,
    pub category: String,
    pub barcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub price_per_unit: Option<String>,
    pub unit: Option<String>,
    pub weight: Decimal,
    pub image_url: String,
    pub discount: Option<i32>,
    pub category: String,
    pub barcode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub user_id: Option<i32>,
    pub store_id: i32,
    pub order_number: String,
    pub total_amount: Decimal,
    pub total_tax: Decimal,
    pub total_savings: Decimal,
    pub total_weight: Decimal,
    /// ISO-8601 date string captured at checkout.
    pub order_date: String,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: Option<i32>,
    pub store_id: i32,
    pub order_number: String,
    pub total_amount: Decimal,
    pub total_tax: Decimal,
    pub total_savings: Decimal,
    pub total_weight: Decimal,
    pub order_date: String,
    pub status: OrderStatus,
}

/// Snapshot of one cart line at purchase time. `price` is the price paid,
/// decoupled from the live product price.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}

/// Order plus its line snapshots, the shape served by the order lookup
/// endpoint and returned from a completed payment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}
