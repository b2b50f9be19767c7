//! Shared building blocks for the notes modules: RFC 9457 problem responses,
//! field-level validation results, a traced outgoing HTTP client and the
//! process shutdown signal.

pub mod http;
pub mod problem;
pub mod shutdown;
pub mod validation;

pub use http::client::TracedClient;
pub use problem::{Problem, ProblemResponse};
pub use validation::{FieldViolation, Violations};
