//! The cart store.
//!
//! An ordered list of product snapshots with quantities, unique by product
//! id. Both mutations enforce the same invariant: every line has a strictly
//! positive quantity that does not exceed the product's stock at the moment
//! of the check. Lines reaching quantity 0 are removed, never kept.

use serde::Serialize;

use crate::product::Product;
use crate::types::{Price, ProductId};

/// A cart line: a product snapshot plus a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line (`price * quantity`).
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.product.price.line_total(self.quantity)
    }
}

/// Result of an explicit add-to-cart action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// The line was inserted or incremented.
    Added,
    /// Incrementing would exceed stock; the cart is unchanged and the
    /// customer gets a warning.
    OutOfStock,
    /// The product has no stock at all; the action is ignored silently.
    Unavailable,
}

/// The customer's order in progress.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines (the badge count).
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Quantity of a product currently in the cart, if any.
    #[must_use]
    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.items
            .iter()
            .find(|item| &item.product.id == id)
            .map(|item| item.quantity)
    }

    /// Explicit add-to-cart.
    ///
    /// Ignored when the product has no stock. An existing line is
    /// incremented by 1 unless that would exceed the product's stock, in
    /// which case the cart is left unchanged and [`AddOutcome::OutOfStock`]
    /// signals the warning. A missing line is inserted with quantity 1.
    pub fn add(&mut self, product: &Product) -> AddOutcome {
        if !product.in_stock() {
            return AddOutcome::Unavailable;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            if item.quantity >= product.stock {
                return AddOutcome::OutOfStock;
            }
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
        }
        AddOutcome::Added
    }

    /// Increment or decrement a line by `delta`, floored at 0.
    ///
    /// A positive delta whose resulting quantity would exceed `live_stock`
    /// is dropped silently - rapid-click increments fail quietly where the
    /// explicit add warns once. A line reaching 0 is removed. No-op when
    /// the product is not in the cart; the caller resolves `live_stock`
    /// against the catalog and skips the call for unknown products.
    pub fn adjust_quantity(&mut self, id: &ProductId, delta: i32, live_stock: u32) {
        let Some(index) = self.items.iter().position(|item| &item.product.id == id) else {
            return;
        };
        let Some(item) = self.items.get_mut(index) else {
            return;
        };

        let updated = i64::from(item.quantity)
            .saturating_add(i64::from(delta))
            .max(0);
        let updated = u32::try_from(updated).unwrap_or(u32::MAX);

        if delta > 0 && updated > live_stock {
            return;
        }

        if updated == 0 {
            self.items.remove(index);
        } else {
            item.quantity = updated;
        }
    }

    /// Reconcile lines against the live catalog.
    ///
    /// `stock_of` resolves a product id to its current stock, or `None` when
    /// the product no longer exists. Orphaned lines are removed and
    /// quantities are clamped down to current stock (a line clamped to 0 is
    /// removed). Called after admin catalog mutations so stale carts never
    /// outrun a stock reduction.
    pub fn reconcile(&mut self, stock_of: impl Fn(&ProductId) -> Option<u32>) {
        self.items.retain_mut(|item| {
            let Some(stock) = stock_of(&item.product.id) else {
                return false;
            };
            item.quantity = item.quantity.min(stock);
            item.quantity > 0
        });
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
