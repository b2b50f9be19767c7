use apikit::FieldViolation;
use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone)]
pub enum NotesError {
    #[error("Note not found: {id}")]
    NotFound { id: i32 },

    #[error("Note {id} belongs to another user")]
    Forbidden { id: i32 },

    #[error("Validation error: {}", apikit::validation::summarize(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Internal error")]
    Internal,
}

impl From<crate::domain::error::DomainError> for NotesError {
    fn from(e: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match e {
            NotFound { id } => Self::NotFound { id },
            Forbidden { id } => Self::Forbidden { id },
            Validation { violations } => Self::Validation { violations },
            Database { .. } => Self::Internal,
        }
    }
}
