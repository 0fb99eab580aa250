use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::failure::FieldErrors;

/// Problem-details style error payload.
///
/// Field names and casing (`traceId`, `ValidationErrors`) are part of the
/// client contract and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    /// Human-readable failure message
    pub title: String,
    /// Failure kind label
    pub detail: String,
    /// HTTP status code of the response carrying this document
    pub status: u16,
    /// Path of the request that failed
    pub instance: String,
    /// Per-request correlation identifier
    #[serde(rename = "traceId")]
    pub trace_id: String,
    /// Field-level validation messages, present only for validation failures
    #[serde(rename = "ValidationErrors", skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<FieldErrors>,
}

impl IntoResponse for ProblemDetails {
    /// The transport layer applies the status the document already carries.
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
