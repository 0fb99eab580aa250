use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use super::middleware::TraceId;
use crate::errors::RequestContext;

/// Capture the transport-free request view the error responder consumes.
///
/// The trace id comes from the logging middleware's extension; a request
/// that somehow bypassed the middleware still gets a fresh one.
#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let trace_id = parts
            .extensions
            .get::<TraceId>()
            .map(|trace_id| trace_id.0.clone())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(RequestContext {
            path: parts.uri.path().to_string(),
            trace_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_context_reads_path_and_trace_extension() {
        let (mut parts, _) = Request::builder()
            .uri("/products/123?color=black")
            .body(())
            .unwrap()
            .into_parts();
        parts.extensions.insert(TraceId("abc".to_string()));

        let ctx = RequestContext::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(ctx.path, "/products/123");
        assert_eq!(ctx.trace_id, "abc");
    }

    #[tokio::test]
    async fn test_context_generates_trace_id_when_missing() {
        let (mut parts, _) = Request::builder()
            .uri("/carts")
            .body(())
            .unwrap()
            .into_parts();

        let ctx = RequestContext::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(ctx.path, "/carts");
        assert!(!ctx.trace_id.is_empty());
    }
}
