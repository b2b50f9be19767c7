use apikit::FieldViolation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing, unknown or revoked bearer token.
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Wrong email or password; deliberately does not say which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation failed: {}", apikit::validation::summarize(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
