//! Per-field validators for the registration and login forms.
//!
//! Each validator inspects a single field and returns at most one violation;
//! the service composes them into a single pass.

use apikit::FieldViolation;

pub use apikit::validation::{max_chars, min_chars, required};

/// `local@domain.tld` with no whitespace.
pub fn email_shape(field: &str, value: &str) -> Option<FieldViolation> {
    let invalid = || {
        Some(FieldViolation::new(
            field,
            format!("The {field} field must be a valid email address."),
        ))
    };
    if value.chars().any(char::is_whitespace) {
        return invalid();
    }
    let Some((local, domain)) = value.split_once('@') else {
        return invalid();
    };
    if local.is_empty() || domain.contains('@') {
        return invalid();
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => None,
        _ => invalid(),
    }
}

pub fn confirmed(field: &str, value: &str, confirmation: &str) -> Option<FieldViolation> {
    (value != confirmation).then(|| {
        FieldViolation::new(
            field,
            format!("The {field} field confirmation does not match."),
        )
    })
}

pub fn unique_email(field: &str, taken: bool) -> Option<FieldViolation> {
    taken.then(|| FieldViolation::new(field, format!("The {field} has already been taken.")))
}

/// Emails are compared and stored lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(email_shape("email", "a@b.co").is_none());
        assert!(email_shape("email", "first.last@mail.example.org").is_none());
        assert!(email_shape("email", "no-at-sign").is_some());
        assert!(email_shape("email", "@b.co").is_some());
        assert!(email_shape("email", "a@b").is_some());
        assert!(email_shape("email", "a@.co").is_some());
        assert!(email_shape("email", "a b@c.de").is_some());
        assert!(email_shape("email", "a@b@c.de").is_some());
    }

    #[test]
    fn email_is_normalized() {
        assert_eq!(normalize_email("  Ann@Example.COM "), "ann@example.com");
    }

    #[test]
    fn confirmation_must_match() {
        let v = confirmed("password", "secret123", "secret124").unwrap();
        assert_eq!(v.field, "password");
        assert!(confirmed("password", "secret123", "secret123").is_none());
    }
}
