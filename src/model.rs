//! Product record and the validated inputs that create or overwrite it.

use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// A stored product. Store-managed timestamps are never selected into this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    /// The Product ID
    #[schema(example = 1)]
    pub id: i64,
    /// The Product Name
    #[schema(example = "Monitor curvo de 49 pulgadas")]
    pub name: String,
    /// The Product Price
    #[schema(example = 300)]
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    /// The Product Availability
    #[schema(example = true)]
    pub availability: bool,
}

/// Whole prices go out as JSON integers (`300`, not `300.0`).
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if price.fract() == 0.0 && price.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Fields for a new row; the store assigns the id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Full overwrite of the mutable fields of an existing row.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductChanges {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl Product {
    pub fn with_changes(&self, changes: ProductChanges) -> Product {
        Product {
            id: self.id,
            name: changes.name,
            price: changes.price,
            availability: changes.availability,
        }
    }

    pub fn toggled(&self) -> Product {
        Product {
            availability: !self.availability,
            ..self.clone()
        }
    }
}

/// Request body accepted by `POST /api/products` (documentation only; validation reads raw JSON).
#[derive(Deserialize, ToSchema)]
pub struct CreateProductBody {
    #[schema(example = "Monitor curvo 49 pulgadas")]
    pub name: String,
    #[schema(example = 399)]
    pub price: f64,
}

/// Request body accepted by `PUT /api/products/{id}`.
#[derive(Deserialize, ToSchema)]
pub struct UpdateProductBody {
    #[schema(example = "Monitor curvo 49 pulgadas")]
    pub name: String,
    #[schema(example = 399)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}
