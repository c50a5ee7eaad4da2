use crate::models::{Product, ProductUpdate};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for create and update. All six fields are required;
/// a missing field fails deserialization before validation runs.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub stock: i64,
}

impl ProductPayload {
    pub fn into_product(self) -> Product {
        Product::new(
            self.name,
            self.price,
            self.category,
            self.description,
            self.images,
            self.stock,
        )
    }
}

impl From<ProductPayload> for ProductUpdate {
    fn from(payload: ProductPayload) -> Self {
        Self {
            name: payload.name,
            price: payload.price,
            category: payload.category,
            description: payload.description,
            images: payload.images,
            stock: payload.stock,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub stock: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            category: product.category,
            description: product.description,
            images: product.images,
            stock: product.stock,
        }
    }
}
