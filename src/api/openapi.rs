use utoipa::OpenApi;

use crate::api::handlers::{DeleteCartResult, GetCartResult, StoreCartResult};
use crate::errors::ProblemDetails;
use crate::models::{Product, ShoppingCart, ShoppingCartItem};
use crate::queries::get_product_by_id::GetProductByIdResult;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront Services",
        version = "0.1.0",
        description = "Cart and catalog endpoints. Failed requests return a problem-details document with a matching HTTP status and a per-request trace id.",
        contact(
            name = "Storefront API",
        )
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::get_product,
        crate::api::handlers::get_cart,
        crate::api::handlers::store_cart,
        crate::api::handlers::delete_cart,
    ),
    components(
        schemas(
            Product,
            ShoppingCart,
            ShoppingCartItem,
            GetProductByIdResult,
            GetCartResult,
            StoreCartResult,
            DeleteCartResult,
            ProblemDetails,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "products", description = "Catalog product lookups"),
        (name = "carts", description = "Shopping cart operations"),
    )
)]
pub struct ApiDoc;
