use apikit::{FieldViolation, Violations};

use crate::api::NotesApiClient;
use crate::error::ClientError;
use crate::model::{Registration, UserInfo};

pub const MIN_PASSWORD_CHARS: usize = 5;

/// Sign-up form as the user typed it.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn violation(field: &str, message: &str) -> Option<FieldViolation> {
    Some(FieldViolation::new(field, message))
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), ClientError> {
        let mut v = Violations::new();

        if self.name.trim().is_empty() {
            v.check(violation("name", "Name is required"));
        }

        if self.email.trim().is_empty() {
            v.check(violation("email", "Email is required"));
        } else if !looks_like_email(&self.email) {
            v.check(violation("email", "Please enter a valid email"));
        }

        if self.password.is_empty() {
            v.check(violation("password", "Password is required"));
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            v.check(violation(
                "password",
                "Password must be at least 5 characters",
            ));
        }

        if self.confirm_password.is_empty() {
            v.check(violation("confirmPassword", "Please confirm your password"));
        } else if self.password != self.confirm_password {
            v.check(violation("confirmPassword", "Passwords do not match"));
        }

        v.into_result()
            .map_err(|violations| ClientError::Validation { violations })
    }

    /// Validate locally, then create the account. Server-side violations come
    /// back per field just like local ones.
    pub async fn submit(&self, api: &NotesApiClient) -> Result<UserInfo, ClientError> {
        self.validate()?;
        api.register(&Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            password_confirmation: self.confirm_password.clone(),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(form("Ann", "ann@example.com", "hunter2", "hunter2")
            .validate()
            .is_ok());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let err = form("  ", "", "", "").validate().unwrap_err();
        assert_eq!(err.field_message("name"), Some("Name is required"));
        assert_eq!(err.field_message("email"), Some("Email is required"));
        assert_eq!(err.field_message("password"), Some("Password is required"));
        assert_eq!(
            err.field_message("confirmPassword"),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn shape_length_and_match_rules() {
        let err = form("Ann", "ann@example", "abcd", "abce")
            .validate()
            .unwrap_err();
        assert_eq!(err.field_message("email"), Some("Please enter a valid email"));
        assert_eq!(
            err.field_message("password"),
            Some("Password must be at least 5 characters")
        );
        assert_eq!(
            err.field_message("confirmPassword"),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(looks_like_email("a@b.c.d"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a b@c.de"));
        assert!(!looks_like_email("a@b@c.de"));
    }
}
