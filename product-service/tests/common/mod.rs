use product_service::config::{MongoConfig, ProductConfig};
use product_service::services::{InMemoryStore, ProductStore};
use product_service::startup::Application;
use service_core::config::{Config as CoreConfig, Environment};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on a random port over an in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryStore::new())).await
    }

    /// Spawn the service over an injected store implementation.
    pub async fn spawn_with_store(store: Arc<dyn ProductStore>) -> Self {
        let config = ProductConfig {
            common: CoreConfig {
                port: 0,
                environment: Environment::Dev,
            },
            mongodb: MongoConfig {
                uri: "mongodb://localhost:27017".to_string(),
                database: "product_test".to_string(),
            },
        };

        let app = Application::with_store(config, store)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
        }
    }

    pub async fn create_product(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/products", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_product(&self, id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/api/products/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list_products(&self) -> Vec<serde_json::Value> {
        self.client
            .get(format!("{}/api/products", self.address))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse JSON")
    }
}

pub fn sample_product() -> serde_json::Value {
    serde_json::json!({
        "name": "Band",
        "price": 10,
        "category": "accessories",
        "description": "resistance band",
        "images": [],
        "stock": 50
    })
}
