//! Failure taxonomy and problem-details translation for API responses

pub mod failure;
pub mod problem;
pub mod responder;

pub use failure::{Failure, FieldErrors};
pub use problem::ProblemDetails;
pub use responder::{ErrorResponder, RequestContext};
