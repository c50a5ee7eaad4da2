use crate::models::{Product, ProductUpdate};
use crate::services::MongoDb;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use service_core::error::AppError;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// The five store primitives the handlers are allowed to issue, one per
/// request. The store connection is injected, never a process-wide global.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError>;
    async fn insert(&self, product: &Product) -> Result<(), AppError>;
    /// Replace all six fields of the product with the given id, keeping the
    /// id itself. Returns the product as persisted after the update.
    async fn replace(&self, id: &str, update: ProductUpdate) -> Result<Option<Product>, AppError>;
    /// Remove the product with the given id, returning it if it existed.
    async fn delete(&self, id: &str) -> Result<Option<Product>, AppError>;
    async fn health_check(&self) -> Result<(), AppError>;
}

/// MongoDB-backed store over the typed `products` collection.
#[derive(Clone)]
pub struct MongoStore {
    db: MongoDb,
}

impl MongoStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductStore for MongoStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let mut cursor = self.db.products().find(doc! {}, None).await?;

        let mut products = Vec::new();
        while let Some(product) = cursor.try_next().await? {
            products.push(product);
        }
        Ok(products)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        let product = self.db.products().find_one(doc! { "_id": id }, None).await?;
        Ok(product)
    }

    async fn insert(&self, product: &Product) -> Result<(), AppError> {
        self.db.products().insert_one(product, None).await?;
        Ok(())
    }

    async fn replace(&self, id: &str, update: ProductUpdate) -> Result<Option<Product>, AppError> {
        let set = mongodb::bson::to_document(&update).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to serialize update: {}", e))
        })?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let product = self
            .db
            .products()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set }, options)
            .await?;
        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<Option<Product>, AppError> {
        let product = self
            .db
            .products()
            .find_one_and_delete(doc! { "_id": id }, None)
            .await?;
        Ok(product)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}

/// In-memory store for tests that must not require a live MongoDB.
#[derive(Default)]
pub struct InMemoryStore {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        Ok(self.products.read().await.get(id).cloned())
    }

    async fn insert(&self, product: &Product) -> Result<(), AppError> {
        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn replace(&self, id: &str, update: ProductUpdate) -> Result<Option<Product>, AppError> {
        let mut products = self.products.write().await;
        let Some(product) = products.get_mut(id) else {
            return Ok(None);
        };
        product.name = update.name;
        product.price = update.price;
        product.category = update.category;
        product.description = update.description;
        product.images = update.images;
        product.stock = update.stock;
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Product>, AppError> {
        Ok(self.products.write().await.remove(id))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
