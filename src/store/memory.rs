use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::session::DocumentSession;
use crate::models::{Product, ShoppingCart};

/// In-memory document session, standing in for an external document store
/// during local serving and in tests.
#[derive(Default)]
pub struct MemorySession {
    products: RwLock<HashMap<Uuid, Product>>,
    carts: RwLock<HashMap<String, ShoppingCart>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentSession for MemorySession {
    async fn load_product(&self, id: Uuid) -> Result<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn upsert_product(&self, product: Product) -> Result<()> {
        self.products.write().await.insert(product.id, product);
        Ok(())
    }

    async fn load_cart(&self, user_name: &str) -> Result<Option<ShoppingCart>> {
        Ok(self.carts.read().await.get(user_name).cloned())
    }

    async fn store_cart(&self, cart: ShoppingCart) -> Result<()> {
        self.carts.write().await.insert(cart.user_name.clone(), cart);
        Ok(())
    }

    async fn delete_cart(&self, user_name: &str) -> Result<bool> {
        Ok(self.carts.write().await.remove(user_name).is_some())
    }

    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }
}
