pub mod logging;

pub use logging::{trace_requests, TraceId};
