use apikit::{validation::summarize, FieldViolation, Problem};
use reqwest::StatusCode;

/// Errors surfaced to whoever drives the client.
///
/// `Display` is the one-line notification shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Please login again")]
    NotLoggedIn,

    #[error("{}", validation_message(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// Summarizer failures. Never fatal for the caller's draft.
    #[error("{0}")]
    Upstream(String),

    #[error("{message} (HTTP {status})")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unreadable session file: {0}")]
    SessionFormat(#[from] serde_json::Error),
}

fn validation_message(violations: &[FieldViolation]) -> String {
    match violations {
        [] => "The given data was invalid.".to_string(),
        [only] => only.message.clone(),
        many => summarize(many),
    }
}

impl ClientError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            violations: vec![FieldViolation::new(field, message)],
        }
    }

    /// Message for `field` when this is a validation failure that names it.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            Self::Validation { violations } => violations
                .iter()
                .find(|v| v.field == field)
                .map(|v| v.message.as_str()),
            _ => None,
        }
    }

    /// Whether the stored session is no longer usable.
    pub fn needs_login(&self) -> bool {
        matches!(self, Self::NotLoggedIn | Self::Unauthenticated(_))
    }

    /// Map a non-success response body to an error. Bodies that are not
    /// problem documents fall back to the status reason.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let problem = serde_json::from_slice::<Problem>(body).ok();
        let detail = problem
            .as_ref()
            .map(|p| p.detail.clone())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        match status {
            StatusCode::UNPROCESSABLE_ENTITY => {
                let violations = problem
                    .and_then(|p| p.errors)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|e| {
                        let field = e.pointer.trim_start_matches('/').to_string();
                        FieldViolation::new(field, e.detail)
                    })
                    .collect();
                Self::Validation { violations }
            }
            StatusCode::UNAUTHORIZED => Self::Unauthenticated(detail),
            StatusCode::FORBIDDEN => Self::Forbidden(detail),
            StatusCode::NOT_FOUND => Self::NotFound(detail),
            _ => Self::Http {
                status: status.as_u16(),
                message: detail,
            },
        }
    }
}
