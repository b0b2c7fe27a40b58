//! Admin authentication extractor.
//!
//! The admin surface is gated by a static equality check against the demo
//! credentials. This is explicitly not a security boundary - it mirrors the
//! hardcoded login of the storefront demo so the admin endpoints are not
//! reachable by a stray customer click.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

/// Demo admin credentials. Hardcoded on purpose; see the module docs.
pub const ADMIN_EMAIL: &str = "admin@feria.com";
pub const ADMIN_PASSWORD: &str = "admin";

/// Headers carrying the admin credentials on mutation requests.
const EMAIL_HEADER: &str = "x-admin-email";
const PASSWORD_HEADER: &str = "x-admin-password";

/// Check a credential pair against the hardcoded demo values.
#[must_use]
pub fn credentials_match(email: &str, password: &str) -> bool {
    email == ADMIN_EMAIL && password == ADMIN_PASSWORD
}

/// Extractor that requires admin credentials on the request.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_: RequireAdminAuth) -> impl IntoResponse {
///     // only reached with valid credentials
/// }
/// ```
pub struct RequireAdminAuth;

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
        };

        if credentials_match(header(EMAIL_HEADER), header(PASSWORD_HEADER)) {
            Ok(Self)
        } else {
            Err(AppError::Unauthorized)
        }
    }
}
