//! Core types for FeriApp.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod unit;

pub use category::{Category, CategoryFilter};
pub use id::*;
pub use price::Price;
pub use unit::Unit;
