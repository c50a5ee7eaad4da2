//! service-core: Shared infrastructure for product-service.
pub mod config;
pub mod error;
pub mod observability;
