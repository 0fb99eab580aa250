use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Per-request correlation identifier.
///
/// Inserted into the request extensions before any handler runs, so
/// handlers and the error responder can attach it to their output.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

/// Log every request and response, tagging both with a fresh trace id.
pub async fn trace_requests(mut request: Request, next: Next) -> Response {
    let start = Instant::now();
    let trace_id = Uuid::new_v4().to_string();

    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or("").to_string();

    request.extensions_mut().insert(TraceId(trace_id.clone()));

    info!(
        trace_id = %trace_id,
        method = %method,
        path = %path,
        query = %sanitize_query(&query),
        "Incoming request"
    );

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!(
            trace_id = %trace_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed (server error)"
        );
    } else if status.is_client_error() {
        warn!(
            trace_id = %trace_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed (client error)"
        );
    } else {
        info!(
            trace_id = %trace_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    }

    response
}

/// Mask sensitive query parameter values before they reach the logs.
fn sanitize_query(query: &str) -> String {
    const SENSITIVE: [&str; 4] = ["api_key", "token", "password", "secret"];

    if query.is_empty() {
        return String::new();
    }

    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if SENSITIVE.contains(&key.to_ascii_lowercase().as_str()) => {
                format!("{}=***", key)
            }
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_query() {
        assert_eq!(sanitize_query(""), "");
        assert_eq!(sanitize_query("color=black"), "color=black");
        assert_eq!(sanitize_query("token=secret123"), "token=***");
        assert_eq!(
            sanitize_query("color=black&api_key=secret&limit=10"),
            "color=black&api_key=***&limit=10"
        );
    }
}
