//! External collaborators for the storefront.
//!
//! # Services
//!
//! - `describe` - Gemini-backed product description generation

pub mod describe;

pub use describe::DescribeClient;
