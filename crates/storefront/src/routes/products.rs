//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use feriapp_core::{Category, CategoryFilter, Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Catalog filter query parameters.
///
/// `category` must be one of the closed category labels; absent means the
/// "Todos" sentinel. `q` is the free-text search box.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<Category>,
    pub q: Option<String>,
}

/// Catalog listing, filtered by category chip and search query.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Product>> {
    let store = state.store().read().await;
    let visible = store.filtered_products(
        CategoryFilter::from(query.category),
        query.q.as_deref().unwrap_or_default(),
    );
    Json(visible.into_iter().cloned().collect())
}

/// Single product by id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let store = state.store().read().await;
    store
        .find_product(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
