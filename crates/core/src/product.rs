//! Catalog entries and store settings.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId, Unit};

/// A catalog entry.
///
/// Created, edited and deleted only through the admin mutations in
/// [`crate::store::StoreState`]; the customer-facing side reads it, except
/// for the stock decrement performed at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display code shown in search results (e.g. "G0001").
    pub internal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub title: String,
    pub description: String,
    /// Whole-peso price. Non-negative by type.
    pub price: Price,
    /// Previous price, shown struck through for promotions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Price>,
    /// Authoritative available quantity. Non-negative by type.
    pub stock: u32,
    pub unit: Unit,
    pub image: String,
    pub category: Category,
    /// Whether this entry is a bundled pack.
    pub is_pack: bool,
    pub available: bool,
    /// Extra search terms (e.g. `["champu", "pelo"]` for a shampoo).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Product {
    /// Whether at least one unit can still be added to a cart.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Process-wide store configuration.
///
/// Mutated only by the admin full-replace; read by checkout and the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    pub is_open: bool,
    /// e.g. "Feria de los Domingos - Puesto 42".
    pub location_name: String,
    pub delivery_cost: Price,
    /// Recipient of the order hand-off message.
    pub whatsapp_number: String,
    pub profile_image: String,
}
