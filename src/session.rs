use chrono::Utc;
use rand::Rng;
use thiserror::Error;

use crate::cart::{Cart, CartTotals};
use crate::checkout::{Verification, VerifierConfig, WeightVerifier};
use crate::models::{
    NewOrder, NewOrderItem, OrderStatus, OrderWithItems, Product, Store,
};
use crate::scan::{parse_store_code, ScanError};
use crate::storage::SharedStorage;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no store selected")]
    NoStore,
    #[error("cart is empty")]
    EmptyCart,
    #[error("checkout has not been started")]
    NotCheckedOut,
    #[error("weight verification has not completed")]
    NotVerified,
}

/// State of the single active shopping trip: the entered store, the last
/// scanned product, the cart, and any running weight verification.
///
/// An explicit object driven by its caller; the storage backend is injected
/// so the flow can be exercised end to end in tests.
pub struct ShoppingSession {
    storage: SharedStorage,
    store: Option<Store>,
    current_product: Option<Product>,
    cart: Cart,
    verification: Option<Verification>,
}

impl ShoppingSession {
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            storage,
            store: None,
            current_product: None,
            cart: Cart::new(),
            verification: None,
        }
    }

    pub fn store(&self) -> Option<&Store> {
        self.store.as_ref()
    }

    pub fn current_product(&self) -> Option<&Product> {
        self.current_product.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Resolve a scanned store payload and enter that store. Malformed
    /// payloads and unknown stores leave the session unchanged.
    pub fn enter_store(&mut self, payload: &str) -> Option<&Store> {
        let code = parse_store_code(payload)?;
        let store = self
            .storage
            .store_by_qr_code(payload)
            .or_else(|| self.storage.store(code.id))?;
        Some(self.store.insert(store))
    }

    /// Resolve a scanned barcode into the current product.
    pub fn scan_product(&mut self, barcode: &str) -> Result<&Product, ScanError> {
        let product = self
            .storage
            .product_by_barcode(barcode)
            .ok_or(ScanError::NoCodeFound)?;
        tracing::debug!(barcode, product_id = product.id, "product scanned");
        Ok(self.current_product.insert(product))
    }

    pub fn add_to_cart(&mut self, product: Product, quantity: u32) {
        self.cart.add_line(product, quantity);
    }

    pub fn remove_from_cart(&mut self, product_id: i32) {
        self.cart.remove_line(product_id);
    }

    pub fn set_quantity(&mut self, product_id: i32, quantity: u32) {
        self.cart.set_quantity(product_id, quantity);
    }

    /// Start weight verification against the current cart weight. Requires
    /// an entered store and a non-empty cart. Re-entering checkout cancels
    /// any previous verification.
    pub fn begin_checkout(&mut self, config: VerifierConfig) -> Result<&Verification, SessionError> {
        if self.store.is_none() {
            return Err(SessionError::NoStore);
        }
        if self.cart.is_empty() {
            return Err(SessionError::EmptyCart);
        }
        let expected = self.cart.totals().weight;
        let verification = WeightVerifier::with_config(expected, config).start();
        Ok(self.verification.insert(verification))
    }

    pub fn verification(&self) -> Option<&Verification> {
        self.verification.as_ref()
    }

    pub fn verification_mut(&mut self) -> Option<&mut Verification> {
        self.verification.as_mut()
    }

    /// Abandon the checkout. The cart is untouched.
    pub fn cancel_checkout(&mut self) {
        self.verification = None;
    }

    /// Snapshot the cart into an order with one item per line, then clear
    /// the session for the next trip. Rejected until the active
    /// verification reports `Verified`.
    pub fn complete_payment(&mut self) -> Result<OrderWithItems, SessionError> {
        let verification = self
            .verification
            .as_ref()
            .ok_or(SessionError::NotCheckedOut)?;
        if !verification.verified() {
            return Err(SessionError::NotVerified);
        }
        let store_id = self.store.as_ref().ok_or(SessionError::NoStore)?.id;

        let totals = self.cart.totals();
        let order = self.storage.create_order(NewOrder {
            user_id: None,
            store_id,
            order_number: order_number(),
            total_amount: totals.total,
            total_tax: totals.tax,
            total_savings: totals.savings,
            total_weight: totals.weight,
            order_date: Utc::now().to_rfc3339(),
            status: OrderStatus::Completed,
        });

        let items = self
            .cart
            .lines()
            .iter()
            .map(|line| {
                self.storage.create_order_item(NewOrderItem {
                    order_id: order.id,
                    product_id: line.product.id,
                    quantity: line.quantity as i32,
                    price: line.product.price,
                })
            })
            .collect();

        self.cart.clear();
        self.current_product = None;
        self.verification = None;

        tracing::info!(
            order_id = order.id,
            order_number = %order.order_number,
            "payment completed"
        );

        Ok(OrderWithItems { order, items })
    }
}

/// Human-readable order number in the demo's `#NNNN` format.
fn order_number() -> String {
    format!("#{:04}", rand::rng().random_range(0..10_000))
}
