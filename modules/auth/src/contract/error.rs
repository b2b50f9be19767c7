use apikit::FieldViolation;
use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone)]
pub enum AuthError {
    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation error: {}", apikit::validation::summarize(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Internal error")]
    Internal,
}

impl From<crate::domain::error::DomainError> for AuthError {
    fn from(e: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match e {
            Unauthenticated => Self::Unauthenticated,
            InvalidCredentials => Self::InvalidCredentials,
            Validation { violations } => Self::Validation { violations },
            Database { .. } => Self::Internal,
        }
    }
}
