use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Product, ShoppingCart};

/// Document session trait abstracting the backing document store.
///
/// The service only ever talks to this seam; the store behind it is an
/// external collaborator.
#[async_trait]
pub trait DocumentSession: Send + Sync {
    /// Load a product by id
    async fn load_product(&self, id: Uuid) -> Result<Option<Product>>;

    /// Insert or replace a product
    async fn upsert_product(&self, product: Product) -> Result<()>;

    /// Load a cart by the owning user's name
    async fn load_cart(&self, user_name: &str) -> Result<Option<ShoppingCart>>;

    /// Insert or replace a cart (identity is the user name)
    async fn store_cart(&self, cart: ShoppingCart) -> Result<()>;

    /// Delete a cart, returning whether one existed
    async fn delete_cart(&self, user_name: &str) -> Result<bool>;

    /// Test the session's connection to its store
    async fn test_connection(&self) -> Result<()>;
}
