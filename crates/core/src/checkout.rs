//! The checkout composer.
//!
//! Turns the cart, the checkout form, and the store settings into the order
//! summary message and the WhatsApp deep link. Composition is pure; the
//! stock deduction and cart clearing that accompany a checkout live in
//! [`crate::store::StoreState::checkout`].

use std::fmt::Write as _;

use serde::Serialize;

use crate::cart::Cart;
use crate::customer::{CustomerInfo, DeliveryMethod};
use crate::product::StoreSettings;
use crate::types::Price;

/// Store display name used in the order header.
const STORE_NAME: &str = "El Puesto del Griego";

/// Closing line offering a payment link.
const PAYMENT_LINK_NOTICE: &str =
    "_Si necesitás link de pago para hacerlo online, avisame y te lo paso._";

/// A composed order, ready to hand off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub subtotal: Price,
    pub total: Price,
    /// Plain-text order summary with real newlines, unencoded.
    pub message: String,
    /// `https://wa.me/...` deep link with the message percent-encoded once.
    pub whatsapp_url: String,
}

/// Compose the order summary and deep link.
///
/// Assumes a non-empty cart and validated customer info; the state layer
/// rejects both before calling in here. The message is assembled as plain
/// UTF-8 and percent-encoded exactly once when the link is built, so
/// customer-supplied text cannot smuggle reserved characters into the URI.
#[must_use]
pub fn compose_order(
    cart: &Cart,
    customer: &CustomerInfo,
    settings: &StoreSettings,
) -> OrderDraft {
    let subtotal = cart.subtotal();
    let total = match customer.delivery_method {
        DeliveryMethod::Delivery => subtotal + settings.delivery_cost,
        DeliveryMethod::Pickup => subtotal,
    };

    let mut message = String::new();
    let _ = writeln!(message, "*PEDIDO NUEVO - {STORE_NAME}*");
    let _ = writeln!(message);
    let _ = writeln!(message, "Soy *{}*.", customer.name);
    let _ = writeln!(message);
    let _ = writeln!(message, "*Mi Pedido:*");
    for item in cart.items() {
        let _ = writeln!(
            message,
            "• {}x *{}* ({})",
            item.quantity,
            item.product.title,
            item.line_total()
        );
    }
    let _ = writeln!(message);
    let _ = writeln!(message, "----------------");
    let _ = writeln!(message, "Subtotal: {subtotal}");
    match customer.delivery_method {
        DeliveryMethod::Delivery => {
            let _ = writeln!(message, "Envío: {}", settings.delivery_cost);
            let _ = writeln!(message, "Dirección: {}", customer.address);
        }
        DeliveryMethod::Pickup => {
            let _ = writeln!(message, "Retiro en el puesto");
        }
    }
    let _ = writeln!(message, "*Total Final: {total}*");
    let _ = writeln!(message);
    let notes = if customer.notes.trim().is_empty() {
        "-"
    } else {
        customer.notes.as_str()
    };
    let _ = writeln!(message, "Notas: {notes}");
    let _ = writeln!(message);
    let _ = write!(message, "{PAYMENT_LINK_NOTICE}");

    let whatsapp_url = format!(
        "https://wa.me/{}?text={}",
        settings.whatsapp_number,
        urlencoding::encode(&message)
    );

    OrderDraft {
        subtotal,
        total,
        message,
        whatsapp_url,
    }
}
