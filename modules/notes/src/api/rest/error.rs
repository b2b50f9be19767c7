use apikit::problem::{from_parts, ProblemResponse};
use axum::http::StatusCode;

use crate::domain::error::DomainError;

/// Map domain error to RFC 9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::NotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "NOTES_NOT_FOUND",
            "Note not found",
            format!("Note with id {id} was not found"),
            instance,
        ),
        DomainError::Forbidden { .. } => from_parts(
            StatusCode::FORBIDDEN,
            "NOTES_FORBIDDEN",
            "Forbidden",
            "Unauthorized access",
            instance,
        ),
        DomainError::Validation { violations } => {
            let mut resp = from_parts(
                StatusCode::UNPROCESSABLE_ENTITY,
                "NOTES_VALIDATION",
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
