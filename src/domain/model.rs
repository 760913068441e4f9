use serde::{Deserialize, Serialize};

/// Immutable product value as returned by the remote catalog. Two DTOs with
/// equal fields are interchangeable; `price` may be null in source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDTO {
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
    pub availability: bool,
}
