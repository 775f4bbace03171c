use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{
        LayoutSection, Order, OrderItem, OrderStatus, OrderWithItems, Product, SectionPosition,
        StoreLayout,
    },
    routes::{health, orders, products, stores},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        stores::get_store,
        stores::get_store_by_qr,
        products::list_products,
        products::get_product_by_barcode,
        products::list_products_by_category,
        products::list_recommended_products,
        products::list_related_products,
        orders::create_order,
        orders::get_order,
        orders::list_user_orders,
    ),
    components(
        schemas(
            health::HealthData,
            stores::StoreWithLayout,
            StoreLayout,
            LayoutSection,
            SectionPosition,
            Product,
            Order,
            OrderItem,
            OrderStatus,
            OrderWithItems,
            orders::CreateOrderRequest,
            orders::CreateOrderItem,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Stores", description = "Store lookup endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
