//! Admin route handlers.
//!
//! Catalog CRUD and the settings full-replace are direct state-setters: the
//! admin form validates before submitting, so beyond the credential gate
//! there is no validation layer here. Every mutation runs through
//! [`feriapp_core::StoreState`], which reconciles the customer cart against
//! the edited catalog.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use feriapp_core::{Category, Price, Product, ProductId, StoreSettings, Unit};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::middleware::auth::credentials_match;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
}

/// Product creation body: a product without a mandatory id.
///
/// The id is minted server-side when the form does not carry one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub internal_code: String,
    #[serde(default)]
    pub barcode: Option<String>,
    pub title: String,
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub old_price: Option<Price>,
    pub stock: u32,
    pub unit: Unit,
    pub image: String,
    pub category: Category,
    pub is_pack: bool,
    pub available: bool,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CreateProductRequest {
    fn into_product(self) -> Product {
        Product {
            id: self.id.unwrap_or_else(ProductId::generate),
            internal_code: self.internal_code,
            barcode: self.barcode,
            title: self.title,
            description: self.description,
            price: self.price,
            old_price: self.old_price,
            stock: self.stock,
            unit: self.unit,
            image: self.image,
            category: self.category,
            is_pack: self.is_pack,
            available: self.available,
            keywords: self.keywords,
        }
    }
}

/// Describe request body.
#[derive(Debug, Deserialize)]
pub struct DescribeRequest {
    pub title: String,
}

/// Describe response body.
#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub description: String,
}

/// Static credential check.
///
/// Not a security boundary: a fixed demo credential pair guards the admin
/// panel, and a mismatch gets the same user-visible message the demo shows.
#[instrument(skip(request))]
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>> {
    if credentials_match(&request.email, &request.password) {
        Ok(Json(LoginResponse { ok: true }))
    } else {
        Err(AppError::Unauthorized)
    }
}

/// Create a catalog product.
#[instrument(skip(state, request))]
pub async fn create_product(
    _: RequireAdminAuth,
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Json<Product>> {
    let product = request.into_product();
    let mut store = state.store().write().await;
    let id = store.create_product(product);
    tracing::info!(product_id = %id, "product created");
    let created = store
        .find_product(&id)
        .cloned()
        .ok_or_else(|| AppError::Internal("created product vanished".to_owned()))?;
    Ok(Json(created))
}

/// Update a catalog product by id (full replace).
#[instrument(skip(state, product))]
pub async fn update_product(
    _: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut product): Json<Product>,
) -> Result<Json<Product>> {
    // The path wins over whatever id the body carries.
    product.id = ProductId::new(id);
    let mut store = state.store().write().await;
    store.update_product(product.clone())?;
    tracing::info!(product_id = %product.id, "product updated");
    Ok(Json(product))
}

/// Delete a catalog product by id.
#[instrument(skip(state))]
pub async fn delete_product(
    _: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<()> {
    let id = ProductId::new(id);
    let mut store = state.store().write().await;
    store.delete_product(&id)?;
    tracing::info!(product_id = %id, "product deleted");
    Ok(())
}

/// Full replace of the store settings.
#[instrument(skip(state, settings))]
pub async fn update_settings(
    _: RequireAdminAuth,
    State(state): State<AppState>,
    Json(settings): Json<StoreSettings>,
) -> Json<StoreSettings> {
    let mut store = state.store().write().await;
    store.replace_settings(settings);
    tracing::info!("store settings replaced");
    Json(store.settings().clone())
}

/// Generate a promotional description for a product title.
///
/// Best-effort: always 200, falling back to a fixed string when the
/// collaborator is unavailable or errors.
#[instrument(skip(state, request))]
pub async fn describe(
    _: RequireAdminAuth,
    State(state): State<AppState>,
    Json(request): Json<DescribeRequest>,
) -> Json<DescribeResponse> {
    let description = state.describe().generate(&request.title).await;
    Json(DescribeResponse { description })
}
