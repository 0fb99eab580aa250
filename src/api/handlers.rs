use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{ErrorResponder, Failure, ProblemDetails, RequestContext};
use crate::models::ShoppingCart;
use crate::queries::get_product_by_id::{self, GetProductByIdQuery, GetProductByIdResult};
use crate::store::Store;

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub session: Store,
    pub responder: ErrorResponder,
    pub instance_id: String,
}

/// Cart lookup response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCartResult {
    pub cart: ShoppingCart,
}

/// Cart store response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreCartResult {
    pub user_name: String,
}

/// Cart delete response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCartResult {
    pub is_success: bool,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "storefront",
        "version": env!("CARGO_PKG_VERSION"),
        "instance_id": state.instance_id,
        "uptime_seconds": START_TIME.elapsed().as_secs(),
    }))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = Uuid, Path, description = "Product UUID")
    ),
    responses(
        (status = 200, description = "Product found", body = GetProductByIdResult),
        (status = 404, description = "Product not found", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match get_product_by_id::handle(state.session.as_ref(), GetProductByIdQuery { id }).await {
        Ok(result) => {
            info!(product_id = %id, "Found product: {}", result.product.name);
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(failure) => state.responder.handle(&ctx, &failure).into_response(),
    }
}

/// Get a user's shopping cart
#[utoipa::path(
    get,
    path = "/carts/{user_name}",
    tag = "carts",
    params(
        ("user_name" = String, Path, description = "Cart owner's user name")
    ),
    responses(
        (status = 200, description = "Cart found", body = GetCartResult),
        (status = 404, description = "Cart not found", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    )
)]
pub async fn get_cart(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(user_name): Path<String>,
) -> impl IntoResponse {
    match state.session.load_cart(&user_name).await {
        Ok(Some(cart)) => {
            info!(
                user_name = %user_name,
                total_price = cart.total_price(),
                "Loaded cart"
            );
            (StatusCode::OK, Json(GetCartResult { cart })).into_response()
        }
        Ok(None) => state
            .responder
            .handle(&ctx, &Failure::cart_not_found(&user_name))
            .into_response(),
        Err(e) => state
            .responder
            .handle(&ctx, &Failure::from(e))
            .into_response(),
    }
}

/// Store (insert or replace) a shopping cart
#[utoipa::path(
    post,
    path = "/carts",
    tag = "carts",
    request_body = ShoppingCart,
    responses(
        (status = 201, description = "Cart stored", body = StoreCartResult),
        (status = 400, description = "Cart failed validation", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    )
)]
pub async fn store_cart(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(cart): Json<ShoppingCart>,
) -> impl IntoResponse {
    if let Err(failure) = cart.validate() {
        return state.responder.handle(&ctx, &failure).into_response();
    }

    let user_name = cart.user_name.clone();
    match state.session.store_cart(cart).await {
        Ok(()) => {
            info!(user_name = %user_name, "Stored cart");
            (StatusCode::CREATED, Json(StoreCartResult { user_name })).into_response()
        }
        Err(e) => state
            .responder
            .handle(&ctx, &Failure::from(e))
            .into_response(),
    }
}

/// Delete a user's shopping cart
#[utoipa::path(
    delete,
    path = "/carts/{user_name}",
    tag = "carts",
    params(
        ("user_name" = String, Path, description = "Cart owner's user name")
    ),
    responses(
        (status = 200, description = "Cart deleted", body = DeleteCartResult),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    )
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(user_name): Path<String>,
) -> impl IntoResponse {
    match state.session.delete_cart(&user_name).await {
        Ok(existed) => {
            info!(user_name = %user_name, existed, "Deleted cart");
            // Delete is idempotent; a missing cart still reports success
            (StatusCode::OK, Json(DeleteCartResult { is_success: true })).into_response()
        }
        Err(e) => state
            .responder
            .handle(&ctx, &Failure::from(e))
            .into_response(),
    }
}
