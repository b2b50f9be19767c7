use serde::{Deserialize, Serialize};
use std::fmt;

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulates violations from several field validators into one pass.
///
/// Each validator returns `Option<FieldViolation>`; the first violation per
/// field wins so a field is reported once.
#[derive(Debug, Default, Clone)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, result: Option<FieldViolation>) -> &mut Self {
        if let Some(v) = result {
            if !self.0.iter().any(|existing| existing.field == v.field) {
                self.0.push(v);
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing was rejected, otherwise every violation collected.
    pub fn into_result(self) -> Result<(), Vec<FieldViolation>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

/// Join violations as `field: message; field: message` for logs and error displays.
pub fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn required(field: &str, value: &str) -> Option<FieldViolation> {
    value
        .trim()
        .is_empty()
        .then(|| FieldViolation::new(field, format!("The {field} field is required.")))
}

/// Length is counted in characters, not bytes.
pub fn max_chars(field: &str, value: &str, max: usize) -> Option<FieldViolation> {
    (value.chars().count() > max).then(|| {
        FieldViolation::new(
            field,
            format!("The {field} field must not be greater than {max} characters."),
        )
    })
}

pub fn min_chars(field: &str, value: &str, min: usize) -> Option<FieldViolation> {
    (value.chars().count() < min).then(|| {
        FieldViolation::new(
            field,
            format!("The {field} field must be at least {min} characters."),
        )
    })
}
