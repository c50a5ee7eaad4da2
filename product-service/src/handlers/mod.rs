pub mod health;
pub mod products;

pub use health::{health_check, root_banner};
pub use products::{create_product, delete_product, get_product, list_products, update_product};
