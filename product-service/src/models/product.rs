use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product document as persisted in the `products` collection.
///
/// The id is assigned once at construction and never changes; updates
/// replace every other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub stock: i64,
}

impl Product {
    pub fn new(
        name: String,
        price: f64,
        category: String,
        description: String,
        images: Vec<String>,
        stock: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            category,
            description,
            images,
            stock,
        }
    }
}

/// The six replaceable fields of a product, serialized as a `$set`
/// document on update. `_id` is deliberately absent.
#[derive(Debug, Clone, Serialize)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub stock: i64,
}
