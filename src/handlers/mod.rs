//! HTTP handlers for the product routes.

pub mod products;
pub use products::*;
