use chrono::{DateTime, Utc};

/// Public user model for inter-module communication (no credentials, no serde).
///
/// This is also what the bearer gate places into request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration form as submitted.
#[derive(Clone, Default)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Login form as submitted.
#[derive(Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Result of a successful login: the plaintext token is only ever returned here.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub user: User,
}
