//! Checkout route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use feriapp_core::{CustomerInfo, OrderDraft};

use crate::error::Result;
use crate::state::AppState;

/// Submit the checkout form.
///
/// Validation failures come back as 400 and an empty cart as 409, both
/// before any side effect. On success the stock deduction and cart clear
/// have already happened by the time the draft is returned; opening the
/// WhatsApp link (after its short pacing delay) is the client's job.
#[instrument(skip(state, info), fields(delivery_method = ?info.delivery_method))]
pub async fn submit(
    State(state): State<AppState>,
    Json(info): Json<CustomerInfo>,
) -> Result<Json<OrderDraft>> {
    let mut store = state.store().write().await;
    let draft = store.checkout(&info)?;
    tracing::info!(total = %draft.total, "order composed");
    Ok(Json(draft))
}
