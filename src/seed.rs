use rust_decimal::Decimal;

use crate::models::{LayoutSection, NewProduct, NewStore, SectionPosition, StoreLayout};
use crate::storage::Storage;

/// QR payload of the demo store, also the code emitted by the mock store
/// scanner.
pub const DEMO_STORE_QR: &str = "store:1:GreenMart:Downtown";

/// Populate storage with the demo store and catalog. Called once at server
/// startup and by tests that need seeded data.
pub fn demo_data(storage: &dyn Storage) -> anyhow::Result<()> {
    let layout = StoreLayout {
        sections: vec![
            section("produce", "Produce", "bg-green-100", 0, 0, 33, 67),
            section("bakery", "Bakery", "bg-yellow-100", 33, 0, 33, 67),
            section("dairy", "Dairy", "bg-blue-100", 67, 0, 33, 67),
            section("beverages", "Beverages", "bg-purple-100", 0, 67, 50, 33),
            section("snacks", "Snacks", "bg-red-100", 50, 67, 50, 33),
        ],
    };

    storage.create_store(NewStore {
        name: "GreenMart".into(),
        branch: "Downtown Branch".into(),
        qr_code: DEMO_STORE_QR.into(),
        layout: serde_json::to_string(&layout)?,
    });

    for product in demo_products() {
        storage.create_product(product);
    }

    Ok(())
}

fn section(id: &str, name: &str, color: &str, x: i32, y: i32, width: i32, height: i32) -> LayoutSection {
    LayoutSection {
        id: id.into(),
        name: name.into(),
        color: color.into(),
        position: SectionPosition {
            x,
            y,
            width,
            height,
        },
    }
}

fn demo_products() -> Vec<NewProduct> {
    // (name, description, price, price_per_unit, unit, weight, image, discount, category, barcode)
    let rows = [
        (
            "Organic Broccoli",
            "Fresh organic broccoli, locally sourced",
            Decimal::new(249, 2),
            "$2.49/lb",
            "lb",
            Decimal::new(10, 1),
            "https://images.unsplash.com/photo-1518843875459-f738682238a6?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=200",
            0,
            "produce",
            "7896080900021",
        ),
        (
            "Whole Grain Bread",
            "Freshly baked whole grain bread",
            Decimal::new(399, 2),
            "$3.99",
            "loaf",
            Decimal::new(8, 1),
            "https://images.unsplash.com/photo-1608198093002-ad4e005484ec?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=200",
            10,
            "bakery",
            "7891234567890",
        ),
        (
            "Organic Milk",
            "Organic whole milk from grass-fed cows",
            Decimal::new(429, 2),
            "$4.29",
            "gallon",
            Decimal::new(86, 1),
            "https://images.unsplash.com/photo-1563636619-e9143da7973b?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=200",
            0,
            "dairy",
            "7893210987654",
        ),
        (
            "Organic Apples",
            "Fresh organic apples",
            Decimal::new(249, 2),
            "$2.49/lb",
            "lb",
            Decimal::new(4, 1),
            "https://images.unsplash.com/photo-1560806887-1e4cd0b6cbd6?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150",
            15,
            "produce",
            "7899876543210",
        ),
        (
            "Greek Yogurt",
            "Plain Greek yogurt, high in protein",
            Decimal::new(499, 2),
            "$4.99",
            "32 oz",
            Decimal::new(20, 1),
            "https://images.unsplash.com/photo-1556881286-fc6915169721?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150",
            0,
            "dairy",
            "7895432109876",
        ),
        (
            "Organic Bananas",
            "Organic fair-trade bananas",
            Decimal::new(79, 2),
            "$0.79/lb",
            "lb",
            Decimal::new(8, 1),
            "https://images.unsplash.com/photo-1575224300306-1b8da36134ec?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
            15,
            "produce",
            "7897890123456",
        ),
        (
            "Strawberries",
            "Fresh strawberries, locally grown",
            Decimal::new(499, 2),
            "$4.99",
            "16 oz",
            Decimal::new(10, 1),
            "https://images.unsplash.com/photo-1464965911861-746a04b4bca6?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150",
            0,
            "produce",
            "7895678901234",
        ),
        (
            "Organic Honey",
            "Raw, unfiltered organic honey",
            Decimal::new(649, 2),
            "$6.49",
            "12 oz",
            Decimal::new(75, 2),
            "https://images.unsplash.com/photo-1587049352851-8d4e89133924?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150",
            0,
            "grocery",
            "7891212343456",
        ),
    ];

    rows.into_iter()
        .map(
            |(name, description, price, per_unit, unit, weight, image, discount, category, barcode)| {
                NewProduct {
                    name: name.into(),
                    description: description.into(),
                    price,
                    price_per_unit: Some(per_unit.into()),
                    unit: Some(unit.into()),
                    weight,
                    image_url: image.into(),
                    discount: Some(discount),
                    category: category.into(),
                    barcode: barcode.into(),
                }
            },
        )
        .collect()
}
