use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::Failure;
use crate::models::Product;
use crate::store::DocumentSession;

/// Query for a single product by identifier
#[derive(Debug, Clone, Copy)]
pub struct GetProductByIdQuery {
    pub id: Uuid,
}

/// Result of a successful product lookup
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProductByIdResult {
    pub product: Product,
}

/// Load a product from the session, failing with `NotFound` when the id
/// does not resolve to a document.
pub async fn handle(
    session: &dyn DocumentSession,
    query: GetProductByIdQuery,
) -> Result<GetProductByIdResult, Failure> {
    info!(product_id = %query.id, "Handling GetProductById query");

    let product = session.load_product(query.id).await.map_err(Failure::from)?;

    match product {
        Some(product) => Ok(GetProductByIdResult { product }),
        None => Err(Failure::product_not_found(query.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySession;

    fn product(id: Uuid) -> Product {
        Product {
            id,
            name: "IPhone X".to_string(),
            category: vec!["Smart Phone".to_string()],
            description: "Test product".to_string(),
            image_file: "product-1.png".to_string(),
            price: 950.0,
        }
    }

    #[tokio::test]
    async fn test_returns_product_when_present() {
        let session = MemorySession::new();
        let id = Uuid::new_v4();
        session.upsert_product(product(id)).await.unwrap();

        let result = handle(&session, GetProductByIdQuery { id }).await.unwrap();
        assert_eq!(result.product, product(id));
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let session = MemorySession::new();
        let id = Uuid::new_v4();

        let failure = handle(&session, GetProductByIdQuery { id })
            .await
            .unwrap_err();

        assert_eq!(failure.kind_name(), "NotFoundException");
        assert_eq!(failure.to_string(), format!("Product {} not found", id));
    }
}
