//! FeriApp Core - Storefront domain library.
//!
//! This crate holds the whole domain of the FeriApp storefront demo:
//! - [`types`] - Newtype wrappers and closed enums (IDs, prices, categories, units)
//! - [`product`] - Catalog entries and store settings
//! - [`customer`] - Per-checkout customer data and its validation
//! - [`normalize`] - Accent- and case-insensitive text canonicalization
//! - [`filter`] - Catalog filtering by category and free-text query
//! - [`cart`] - The cart store and its stock-constrained mutations
//! - [`checkout`] - Order message composition and WhatsApp deep links
//! - [`store`] - The single application-state struct and all its transitions
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no HTTP clients, no async. Every mutation of the session (cart edits,
//! checkout, admin catalog changes) goes through [`store::StoreState`], which
//! keeps the whole thing testable without a server harness.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod customer;
pub mod filter;
pub mod normalize;
pub mod product;
pub mod store;
pub mod types;

pub use cart::{AddOutcome, Cart, CartItem};
pub use checkout::OrderDraft;
pub use customer::{CustomerInfo, CustomerInfoError, DeliveryMethod};
pub use filter::filter_products;
pub use normalize::normalize;
pub use product::{Product, StoreSettings};
pub use store::{CatalogError, CheckoutError, StoreState};
pub use types::*;
