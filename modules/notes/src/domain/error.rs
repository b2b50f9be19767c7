use apikit::FieldViolation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {id}")]
    NotFound { id: i32 },

    /// The note exists but is owned by someone else.
    #[error("Note {id} belongs to another user")]
    Forbidden { id: i32 },

    #[error("Validation failed: {}", apikit::validation::summarize(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    pub fn forbidden(id: i32) -> Self {
        Self::Forbidden { id }
    }

    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
