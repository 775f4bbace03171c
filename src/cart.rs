use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

/// Flat sales tax applied to the cart subtotal (5.5%).
pub const TAX_RATE: Decimal = Decimal::from_parts(55, 0, 0, false, 3);

/// One (product, quantity) pairing within a cart. Quantity is always >= 1;
/// a line that would drop to zero is removed instead.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Derived cart values. Never stored; recomputed from the lines on every
/// [`Cart::totals`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub savings: Decimal,
    pub weight: Decimal,
    pub total: Decimal,
}

/// Ordered collection of cart lines for the active shopping session.
/// At most one line exists per product id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add `quantity` of `product`. An existing line for the same product id
    /// is incremented rather than duplicated. Quantity zero is a no-op.
    pub fn add_line(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    /// Remove the line for `product_id`. Absent ids are ignored.
    pub fn remove_line(&mut self, product_id: i32) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// Overwrite the quantity for `product_id`. Zero behaves as
    /// [`Cart::remove_line`]; absent ids are ignored.
    pub fn set_quantity(&mut self, product_id: i32, quantity: u32) {
        if quantity == 0 {
            self.remove_line(product_id);
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
        {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Recompute all derived values from the current lines.
    pub fn totals(&self) -> CartTotals {
        let mut subtotal = Decimal::ZERO;
        let mut savings = Decimal::ZERO;
        let mut weight = Decimal::ZERO;

        for line in &self.lines {
            let quantity = Decimal::from(line.quantity);
            subtotal += line.product.price * quantity;
            weight += line.product.weight * quantity;
            if let Some(discount) = line.product.discount.filter(|d| *d > 0) {
                savings +=
                    Decimal::from(discount) / Decimal::ONE_HUNDRED * line.product.price * quantity;
            }
        }

        let tax = subtotal * TAX_RATE;
        CartTotals {
            subtotal,
            tax,
            savings,
            weight,
            total: subtotal + tax - savings,
        }
    }
}
