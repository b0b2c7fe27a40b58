//! Per-checkout customer data.
//!
//! A fresh [`CustomerInfo`] is built for every checkout attempt and never
//! persisted. Validation happens here, before the checkout composer runs;
//! the composer itself assumes valid input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    Pickup,
    #[default]
    Delivery,
}

/// Checkout form data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    /// Required only when `delivery_method` is delivery.
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
    pub delivery_method: DeliveryMethod,
}

/// Why a checkout form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerInfoError {
    #[error("name is required")]
    MissingName,
    #[error("address is required for delivery orders")]
    MissingAddress,
}

impl CustomerInfo {
    /// Check the form before it reaches the checkout composer.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerInfoError`] when the name is blank, or the address
    /// is blank while the delivery method is [`DeliveryMethod::Delivery`].
    pub fn validate(&self) -> Result<(), CustomerInfoError> {
        if self.name.trim().is_empty() {
            return Err(CustomerInfoError::MissingName);
        }
        if self.delivery_method == DeliveryMethod::Delivery && self.address.trim().is_empty() {
            return Err(CustomerInfoError::MissingAddress);
        }
        Ok(())
    }
}
