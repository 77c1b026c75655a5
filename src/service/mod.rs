//! Product entity access and request validation.

mod products;
mod validation;
pub use products::ProductService;
pub use validation::{validate_create, validate_id, validate_update, Location, Violation};
