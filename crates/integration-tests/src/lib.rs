//! Integration tests for FeriApp.
//!
//! # Test Categories
//!
//! - `storefront_flow` - Customer browse/cart/checkout scenarios
//! - `order_message` - Order composition and the WhatsApp hand-off link
//! - `admin_catalog` - Admin mutations and cart reconciliation
//!
//! The whole session lives in `feriapp_core::StoreState`, so the tests
//! drive the same transitions the HTTP handlers call, without a server.

use feriapp_core::StoreState;
use feriapp_storefront::seed;

/// A freshly seeded session, identical to what the server boots with.
#[must_use]
pub fn seeded_session() -> StoreState {
    seed::seeded_store()
}
