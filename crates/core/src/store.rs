//! The application state and every transition over it.
//!
//! The whole session - catalog, settings, cart, selection mode - lives in
//! one [`StoreState`] value behind a single state-management boundary. All
//! mutations are synchronous methods on it, so the full customer and admin
//! flow is testable without any HTTP harness.

use thiserror::Error;

use crate::cart::{AddOutcome, Cart};
use crate::checkout::{OrderDraft, compose_order};
use crate::customer::{CustomerInfo, CustomerInfoError};
use crate::filter::filter_products;
use crate::product::{Product, StoreSettings};
use crate::types::{CategoryFilter, ProductId};

/// Errors from catalog mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Errors from the checkout transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error(transparent)]
    Customer(#[from] CustomerInfoError),
}

/// The in-memory session state.
#[derive(Debug, Clone)]
pub struct StoreState {
    catalog: Vec<Product>,
    settings: StoreSettings,
    cart: Cart,
    selection_mode: bool,
}

impl StoreState {
    /// Start a session with a seeded catalog and settings, empty cart.
    #[must_use]
    pub fn new(catalog: Vec<Product>, settings: StoreSettings) -> Self {
        Self {
            catalog,
            settings,
            cart: Cart::default(),
            selection_mode: false,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    #[must_use]
    pub const fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Whether the customer is actively building an order.
    #[must_use]
    pub const fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    #[must_use]
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.iter().find(|product| &product.id == id)
    }

    /// Visible products for the current category chip and search query.
    #[must_use]
    pub fn filtered_products(&self, category: CategoryFilter, query: &str) -> Vec<&Product> {
        filter_products(&self.catalog, category, query)
    }

    // =========================================================================
    // Customer transitions
    // =========================================================================

    /// Explicit add-to-cart for a catalog product.
    ///
    /// Adding also raises selection mode, the observable UI effect of
    /// starting an order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] when the id is not in the
    /// catalog.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<AddOutcome, CatalogError> {
        let product = self
            .find_product(id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownProduct(id.clone()))?;
        let outcome = self.cart.add(&product);
        if outcome == AddOutcome::Added {
            self.selection_mode = true;
        }
        Ok(outcome)
    }

    /// Move a cart line by `delta`, floored at 0.
    ///
    /// Silent no-op when the product is missing from the cart or the
    /// catalog, or when a positive delta would outrun the live stock.
    pub fn adjust_quantity(&mut self, id: &ProductId, delta: i32) {
        let Some(stock) = self.find_product(id).map(|product| product.stock) else {
            return;
        };
        self.cart.adjust_quantity(id, delta, stock);
    }

    /// Checkout: compose the order, deduct stock, clear the cart.
    ///
    /// The stock deduction happens unconditionally once this transition
    /// runs; it is not rolled back if the customer never completes the
    /// WhatsApp hand-off.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] on an empty cart and
    /// [`CheckoutError::Customer`] when the form fails validation.
    pub fn checkout(&mut self, customer: &CustomerInfo) -> Result<OrderDraft, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        customer.validate()?;

        let draft = compose_order(&self.cart, customer, &self.settings);

        for item in self.cart.items() {
            if let Some(product) = self
                .catalog
                .iter_mut()
                .find(|product| product.id == item.product.id)
            {
                product.stock = product.stock.saturating_sub(item.quantity);
            }
        }

        self.cart.clear();
        self.selection_mode = false;
        Ok(draft)
    }

    // =========================================================================
    // Admin transitions
    // =========================================================================

    /// Append a product to the catalog.
    pub fn create_product(&mut self, product: Product) -> ProductId {
        let id = product.id.clone();
        self.catalog.push(product);
        id
    }

    /// Replace a product wholesale, matched by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] when the id is not in the
    /// catalog.
    pub fn update_product(&mut self, product: Product) -> Result<(), CatalogError> {
        let slot = self
            .catalog
            .iter_mut()
            .find(|existing| existing.id == product.id)
            .ok_or_else(|| CatalogError::UnknownProduct(product.id.clone()))?;
        *slot = product;
        self.reconcile_cart();
        Ok(())
    }

    /// Remove a product from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] when the id is not in the
    /// catalog.
    pub fn delete_product(&mut self, id: &ProductId) -> Result<(), CatalogError> {
        let before = self.catalog.len();
        self.catalog.retain(|product| &product.id != id);
        if self.catalog.len() == before {
            return Err(CatalogError::UnknownProduct(id.clone()));
        }
        self.reconcile_cart();
        Ok(())
    }

    /// Full replace of the store settings.
    pub fn replace_settings(&mut self, settings: StoreSettings) {
        self.settings = settings;
    }

    /// Clamp cart lines to the catalog after an admin mutation, so a stock
    /// reduction can never leave a stale cart quantity above it.
    fn reconcile_cart(&mut self) {
        let catalog = std::mem::take(&mut self.catalog);
        self.cart.reconcile(|id| {
            catalog
                .iter()
                .find(|product| &product.id == id)
                .map(|product| product.stock)
        });
        self.catalog = catalog;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::DeliveryMethod;
    use crate::types::{Category, Price, Unit};

    fn product(id: &str, price: u64, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            internal_code: format!("G000{id}"),
            barcode: None,
            title: format!("Producto {id}"),
            description: String::new(),
            price: Price::new(price),
            old_price: None,
            stock,
            unit: Unit::Un,
            image: String::new(),
            category: Category::Almacen,
            is_pack: false,
            available: true,
            keywords: Vec::new(),
        }
    }

    fn settings() -> StoreSettings {
        StoreSettings {
            is_open: true,
            location_name: "Puesto 42".to_owned(),
            delivery_cost: Price::new(200),
            whatsapp_number: "59899123456".to_owned(),
            profile_image: String::new(),
        }
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ana".to_owned(),
            phone: String::new(),
            address: "Av. Brasil 1234".to_owned(),
            notes: String::new(),
            delivery_method: DeliveryMethod::Delivery,
        }
    }

    fn state(products: Vec<Product>) -> StoreState {
        StoreState::new(products, settings())
    }

    #[test]
    fn test_add_raises_selection_mode() {
        let mut state = state(vec![product("1", 100, 5)]);
        assert!(!state.selection_mode());
        let outcome = state.add_to_cart(&ProductId::new("1")).expect("known id");
        assert_eq!(outcome, AddOutcome::Added);
        assert!(state.selection_mode());
    }

    #[test]
    fn test_add_unknown_product() {
        let mut state = state(vec![]);
        let err = state.add_to_cart(&ProductId::new("ghost")).unwrap_err();
        assert_eq!(err, CatalogError::UnknownProduct(ProductId::new("ghost")));
    }

    #[test]
    fn test_rejected_add_does_not_raise_selection_mode() {
        let mut state = state(vec![product("1", 100, 0)]);
        let outcome = state.add_to_cart(&ProductId::new("1")).expect("known id");
        assert_eq!(outcome, AddOutcome::Unavailable);
        assert!(!state.selection_mode());
    }

    #[test]
    fn test_adjust_resolves_stock_from_catalog() {
        let mut state = state(vec![product("1", 100, 2)]);
        let id = ProductId::new("1");
        state.add_to_cart(&id).expect("known id");
        state.adjust_quantity(&id, 1);
        state.adjust_quantity(&id, 1); // past stock, dropped
        assert_eq!(state.cart().quantity_of(&id), Some(2));
    }

    #[test]
    fn test_checkout_empty_cart_is_rejected() {
        let mut state = state(vec![product("1", 100, 5)]);
        assert_eq!(state.checkout(&customer()), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_checkout_invalid_form_is_rejected_before_side_effects() {
        let mut state = state(vec![product("1", 100, 5)]);
        let id = ProductId::new("1");
        state.add_to_cart(&id).expect("known id");

        let mut info = customer();
        info.address = String::new();
        let err = state.checkout(&info).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::Customer(CustomerInfoError::MissingAddress)
        );
        // Nothing was deducted or cleared.
        assert_eq!(state.find_product(&id).map(|p| p.stock), Some(5));
        assert_eq!(state.cart().quantity_of(&id), Some(1));
    }

    #[test]
    fn test_checkout_deducts_stock_and_clears_cart() {
        let mut state = state(vec![product("1", 100, 5)]);
        let id = ProductId::new("1");
        state.add_to_cart(&id).expect("known id");
        state.adjust_quantity(&id, 2);

        let draft = state.checkout(&customer()).expect("valid checkout");
        assert_eq!(draft.subtotal, Price::new(300));
        assert_eq!(draft.total, Price::new(500));
        assert_eq!(state.find_product(&id).map(|p| p.stock), Some(2));
        assert!(state.cart().is_empty());
        assert!(!state.selection_mode());
    }

    #[test]
    fn test_checkout_stock_never_goes_negative() {
        let mut state = state(vec![product("1", 100, 5)]);
        let id = ProductId::new("1");
        state.add_to_cart(&id).expect("known id");
        state.adjust_quantity(&id, 4);

        // Slash the stock below the cart quantity via a raw catalog edit
        // that bypasses reconciliation, so the deduction has to floor.
        let mut edited = product("1", 100, 2);
        edited.stock = 2;
        if let Some(slot) = state.catalog.iter_mut().find(|p| p.id == id) {
            *slot = edited;
        }

        state.checkout(&customer()).expect("valid checkout");
        assert_eq!(state.find_product(&id).map(|p| p.stock), Some(0));
    }

    #[test]
    fn test_update_product_reconciles_cart() {
        let mut state = state(vec![product("1", 100, 5)]);
        let id = ProductId::new("1");
        state.add_to_cart(&id).expect("known id");
        state.adjust_quantity(&id, 3);
        assert_eq!(state.cart().quantity_of(&id), Some(4));

        state
            .update_product(product("1", 100, 2))
            .expect("known id");
        assert_eq!(state.cart().quantity_of(&id), Some(2));
    }

    #[test]
    fn test_delete_product_drops_cart_line() {
        let mut state = state(vec![product("1", 100, 5), product("2", 50, 5)]);
        let id = ProductId::new("1");
        state.add_to_cart(&id).expect("known id");

        state.delete_product(&id).expect("known id");
        assert!(state.cart().is_empty());
        assert!(state.find_product(&id).is_none());
    }

    #[test]
    fn test_update_unknown_product_errors() {
        let mut state = state(vec![]);
        let err = state.update_product(product("9", 10, 1)).unwrap_err();
        assert_eq!(err, CatalogError::UnknownProduct(ProductId::new("9")));
    }

    #[test]
    fn test_delete_unknown_product_errors() {
        let mut state = state(vec![]);
        let err = state.delete_product(&ProductId::new("9")).unwrap_err();
        assert_eq!(err, CatalogError::UnknownProduct(ProductId::new("9")));
    }

    #[test]
    fn test_create_product_appends() {
        let mut state = state(vec![product("1", 100, 5)]);
        let id = state.create_product(product("2", 50, 3));
        assert_eq!(id, ProductId::new("2"));
        assert_eq!(state.catalog().len(), 2);
        assert_eq!(state.catalog().last().map(|p| p.id.as_str()), Some("2"));
    }

    #[test]
    fn test_replace_settings() {
        let mut state = state(vec![]);
        let mut new_settings = settings();
        new_settings.is_open = false;
        new_settings.delivery_cost = Price::new(300);
        state.replace_settings(new_settings.clone());
        assert_eq!(state.settings(), &new_settings);
    }
}
