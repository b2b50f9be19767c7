use apikit::problem::{from_parts, ProblemResponse};
use axum::http::StatusCode;

use crate::domain::error::DomainError;

/// Map domain error to RFC 9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::Unauthenticated => from_parts(
            StatusCode::UNAUTHORIZED,
            "AUTH_UNAUTHENTICATED",
            "Unauthenticated",
            "Unauthenticated.",
            instance,
        ),
        DomainError::InvalidCredentials => from_parts(
            StatusCode::UNAUTHORIZED,
            "AUTH_INVALID_CREDENTIALS",
            "Invalid credentials",
            "Invalid credentials",
            instance,
        ),
        DomainError::Validation { violations } => {
            let mut resp = from_parts(
                StatusCode::UNPROCESSABLE_ENTITY,
                "AUTH_VALIDATION",
                "Validation error",
                apikit::validation::summarize(violations),
                instance,
            );
            resp.0 = resp.0.with_violations(violations);
            resp
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
    }
}
