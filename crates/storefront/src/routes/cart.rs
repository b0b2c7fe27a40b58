//! Cart route handlers.
//!
//! The two mutation endpoints deliberately differ in how they report a
//! stock limit: `/cart/add` is the explicit add button and returns a
//! warning outcome, `/cart/update` is the rapid +/- stepper and stays
//! silent, returning whatever the cart ended up as.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use feriapp_core::{AddOutcome, Cart, CartItem, Price, ProductId};

use crate::error::Result;
use crate::state::AppState;

/// Cart contents as the client sees them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub unit_count: u32,
    pub subtotal: Price,
    pub selection_mode: bool,
}

impl CartView {
    fn new(cart: &Cart, selection_mode: bool) -> Self {
        Self {
            items: cart.items().to_vec(),
            unit_count: cart.unit_count(),
            subtotal: cart.subtotal(),
            selection_mode,
        }
    }
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRequest {
    pub product_id: ProductId,
}

/// Quantity adjustment request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub product_id: ProductId,
    pub delta: i32,
}

/// Response for the explicit add: the outcome plus the resulting cart.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddResponse {
    pub outcome: AddOutcome,
    pub cart: CartView,
}

/// Cart count badge.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u32,
}

/// Current cart contents.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    let store = state.store().read().await;
    Json(CartView::new(store.cart(), store.selection_mode()))
}

/// Explicit add-to-cart.
///
/// 404 for an unknown product; otherwise reports `added`, the
/// `out_of_stock` warning, or the silent `unavailable` no-op.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddRequest>,
) -> Result<Json<AddResponse>> {
    let mut store = state.store().write().await;
    let outcome = store.add_to_cart(&request.product_id)?;
    if outcome == AddOutcome::OutOfStock {
        tracing::info!(product_id = %request.product_id, "add rejected: stock limit");
    }
    Ok(Json(AddResponse {
        outcome,
        cart: CartView::new(store.cart(), store.selection_mode()),
    }))
}

/// Quantity delta from the +/- stepper.
///
/// Never fails: unknown products and stock-exceeding increments are silent
/// no-ops, matching the stepper's rapid-click behavior.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Json<CartView> {
    let mut store = state.store().write().await;
    store.adjust_quantity(&request.product_id, request.delta);
    Json(CartView::new(store.cart(), store.selection_mode()))
}

/// Cart count badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CountResponse> {
    let store = state.store().read().await;
    Json(CountResponse {
        count: store.cart().unit_count(),
    })
}
