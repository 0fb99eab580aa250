use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

/// Field-level validation messages, keyed by the wire-facing field name.
///
/// Ordered map so repeated serializations of the same failure are
/// byte-identical.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A condition that normal request processing could not resolve and that
/// must be surfaced to the client.
///
/// The taxonomy is closed: anything a handler cannot classify is folded
/// into `Unknown`, which keeps the mapping to a response total.
#[derive(Debug, Clone, Error)]
pub enum Failure {
    /// Unexpected server-side fault raised deliberately by application code
    #[error("{0}")]
    Internal(String),

    /// Input failed declarative rule checks; carries field-level detail
    #[error("{message}")]
    Validation {
        message: String,
        errors: FieldErrors,
    },

    /// Malformed client input
    #[error("{0}")]
    BadRequest(String),

    /// Referenced entity absent
    #[error("{0}")]
    NotFound(String),

    /// Anything not otherwise classified. `kind` is the label exposed as
    /// the wire `detail` field.
    #[error("{message}")]
    Unknown { kind: String, message: String },
}

impl Failure {
    /// HTTP status for this failure. Sole source of truth for the
    /// kind-to-status mapping.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Internal(_) => 500,
            Self::Validation { .. } => 400,
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::Unknown { .. } => 500,
        }
    }

    /// Kind label surfaced as the `detail` field. Existing clients match on
    /// these exact names.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Internal(_) => "InternalServerException",
            Self::Validation { .. } => "ValidationException",
            Self::BadRequest(_) => "BadRequestException",
            Self::NotFound(_) => "NotFoundException",
            Self::Unknown { kind, .. } => kind,
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation {
            message: "One or more validation errors occurred".to_string(),
            errors,
        }
    }

    pub fn product_not_found(id: Uuid) -> Self {
        Self::NotFound(format!("Product {} not found", id))
    }

    pub fn cart_not_found(user_name: &str) -> Self {
        Self::NotFound(format!("Cart for user {} not found", user_name))
    }
}

impl From<anyhow::Error> for Failure {
    /// Collaborator errors reach the terminal handler unclassified; keep the
    /// generic label rather than guessing a more specific kind.
    fn from(err: anyhow::Error) -> Self {
        Self::Unknown {
            kind: "Exception".to_string(),
            message: err.to_string(),
        }
    }
}
