use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::FieldViolation;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// RFC 9457 Problem Details for HTTP APIs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    title = "Problem",
    description = "RFC 9457 Problem Details for HTTP APIs"
)]
pub struct Problem {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    pub status: u16,
    /// A human-readable explanation specific to this occurrence of the problem.
    pub detail: String,
    /// The request path that produced the problem.
    pub instance: String,
    /// Machine-readable error code, e.g. `NOTES_FORBIDDEN`.
    pub code: String,
    /// Request id useful for tracing.
    pub request_id: Option<String>,
    /// Per-field validation errors for 422 problems.
    pub errors: Option<Vec<ValidationError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "ValidationError")]
pub struct ValidationError {
    pub detail: String,
    /// JSON Pointer to the invalid location (e.g., "/title").
    pub pointer: String,
}

impl From<&FieldViolation> for ValidationError {
    fn from(v: &FieldViolation) -> Self {
        Self {
            detail: v.message.clone(),
            pointer: format!("/{}", v.field),
        }
    }
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_string(),
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            request_id: None,
            errors: None,
        }
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_violations(self, violations: &[FieldViolation]) -> Self {
        self.with_errors(violations.iter().map(ValidationError::from).collect())
    }
}

/// Axum response wrapper that renders `Problem` with correct status & content type.
#[derive(Debug, Clone)]
pub struct ProblemResponse(pub Problem);

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut resp = axum::Json(self.0).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

/// Build a coded problem for `instance`, tagging it with the current span id when present.
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    let problem = Problem::new(status, title, detail)
        .with_type(format!("https://errors.notes.local/{code}"))
        .with_code(code)
        .with_instance(instance);

    let problem = match tracing::Span::current().id() {
        Some(id) => problem.with_request_id(id.into_u64().to_string()),
        None => problem,
    };

    ProblemResponse(problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_into_response_sets_status_and_content_type() {
        let p = Problem::new(StatusCode::FORBIDDEN, "Forbidden", "not yours");
        let resp = ProblemResponse(p).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let ct = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);
    }

    #[test]
    fn violations_become_json_pointers() {
        let p = Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation failed",
            "The given data was invalid.",
        )
        .with_code("NOTES_VALIDATION")
        .with_violations(&[
            FieldViolation::new("title", "The title field is required."),
            FieldViolation::new("content", "The content field is required."),
        ]);

        assert_eq!(p.status, 422);
        let errors = p.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].pointer, "/title");
        assert_eq!(errors[1].detail, "The content field is required.");
    }

    #[test]
    fn from_parts_sets_code_and_type() {
        let resp = from_parts(
            StatusCode::NOT_FOUND,
            "NOTES_NOT_FOUND",
            "Note not found",
            "Note 7 was not found",
            "/notes/7",
        );
        assert_eq!(resp.0.status, 404);
        assert_eq!(resp.0.code, "NOTES_NOT_FOUND");
        assert_eq!(resp.0.instance, "/notes/7");
        assert!(resp.0.type_url.ends_with("/NOTES_NOT_FOUND"));
    }

    #[test]
    fn parses_without_optional_members() {
        let raw = r#"{
            "type": "https://errors.notes.local/NOTES_FORBIDDEN",
            "title": "Forbidden",
            "status": 403,
            "detail": "Unauthorized access",
            "instance": "/notes/3",
            "code": "NOTES_FORBIDDEN"
        }"#;
        let p: Problem = serde_json::from_str(raw).unwrap();
        assert_eq!(p.status, 403);
        assert!(p.request_id.is_none());
        assert!(p.errors.is_none());
    }
}
