use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{delete_cart, get_cart, get_product, health, store_cart, AppState};
use super::middleware::trace_requests;
use super::openapi::ApiDoc;

pub fn create_router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health))
        // Catalog
        .route("/products/:id", get(get_product))
        // Carts
        .route("/carts", post(store_cart))
        .route("/carts/:user_name", get(get_cart).delete(delete_cart))
        // OpenAPI documentation
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware (order matters: compression -> logging -> cors -> trace)
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(trace_requests))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Add shared state
        .with_state(state)
}
