//! Store header route.

use axum::{Json, extract::State};
use tracing::instrument;

use feriapp_core::StoreSettings;

use crate::state::AppState;

/// Store settings for the header: open flag, location, delivery cost,
/// profile image.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<StoreSettings> {
    let store = state.store().read().await;
    Json(store.settings().clone())
}
