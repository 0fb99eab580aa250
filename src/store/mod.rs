pub mod memory;
pub mod session;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use uuid::uuid;

pub use memory::MemorySession;
pub use session::DocumentSession;

use crate::config::StoreConfig;
use crate::models::Product;

/// Shared session handle - polymorphic over store implementations
pub type Store = Arc<dyn DocumentSession>;

/// Initialize the document store from configuration.
pub async fn init_store(config: &StoreConfig) -> Result<Store> {
    info!("Initializing in-memory document store");
    let session = MemorySession::new();

    if config.seed_demo_catalog {
        let catalog = demo_catalog();
        let count = catalog.len();
        for product in catalog {
            session.upsert_product(product).await?;
        }
        info!("Seeded demo catalog with {} products", count);
    }

    Ok(Arc::new(session) as Store)
}

/// Small fixed catalog with stable ids, for local serving and demos.
fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            id: uuid!("5334c996-8457-4cf0-815c-ed2b77c4ff61"),
            name: "IPhone X".to_string(),
            category: vec!["Smart Phone".to_string()],
            description: "This phone is the company's biggest change to its flagship smartphone in years.".to_string(),
            image_file: "product-1.png".to_string(),
            price: 950.0,
        },
        Product {
            id: uuid!("c67d6323-e8b1-4bdf-9a75-b0dd2f8c0f59"),
            name: "Samsung 10".to_string(),
            category: vec!["Smart Phone".to_string()],
            description: "This phone is the company's biggest change to its flagship smartphone in years.".to_string(),
            image_file: "product-2.png".to_string(),
            price: 840.0,
        },
        Product {
            id: uuid!("4f136e9f-ff8c-4c1f-9a33-d12f689bdab8"),
            name: "Huawei Plus".to_string(),
            category: vec!["White Appliances".to_string()],
            description: "This phone is not only perfect for your appearance, it is also a superhero phone.".to_string(),
            image_file: "product-3.png".to_string(),
            price: 650.0,
        },
    ]
}
