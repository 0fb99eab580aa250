use chrono::Utc;
use tracing::error;

use super::failure::Failure;
use super::problem::ProblemDetails;

/// Read-only view of the request whose failure is being handled.
///
/// Deliberately transport-free so the responder never touches the web
/// framework's types; the api layer captures one of these per request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request path, verbatim
    pub path: String,
    /// Opaque per-request correlation identifier
    pub trace_id: String,
}

/// Terminal failure handler: classifies a failure, logs it once, and builds
/// the problem document the transport layer writes back.
///
/// Holds no per-request state; one instance is constructed at process start
/// and shared. The logging collaborator is the process-global tracing
/// subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorResponder;

impl ErrorResponder {
    pub fn new() -> Self {
        Self
    }

    /// Translate a failure into its problem document.
    ///
    /// Total: every failure yields exactly one document and one status, and
    /// this method itself never fails. Construction is synchronous and
    /// in-memory; nothing is written here.
    pub fn handle(&self, context: &RequestContext, failure: &Failure) -> ProblemDetails {
        error!(
            occurred_at = %Utc::now(),
            trace_id = %context.trace_id,
            kind = failure.kind_name(),
            "Error message: {}", failure
        );

        let validation_errors = match failure {
            Failure::Validation { errors, .. } => Some(errors.clone()),
            _ => None,
        };

        ProblemDetails {
            title: failure.to_string(),
            detail: failure.kind_name().to_string(),
            status: failure.status_code(),
            instance: context.path.clone(),
            trace_id: context.trace_id.clone(),
            validation_errors,
        }
    }
}
