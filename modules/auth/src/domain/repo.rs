use crate::contract::model::User;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A user together with its password hash; never leaves the module.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

/// Returned by `insert_user` when the email is already registered.
/// Lets a concurrent duplicate registration surface as a validation error.
#[derive(Debug, thiserror::Error)]
#[error("email already registered")]
pub struct EmailTaken;

/// Fully-formed user row computed by the service.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Persistence port for users and their personal access tokens.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;

    async fn insert_user(&self, record: NewUserRecord) -> anyhow::Result<User>;

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<StoredUser>>;

    /// Store the digest of a freshly issued token.
    async fn insert_token(
        &self,
        user_id: i32,
        token_hash: &str,
        at: DateTime<Utc>,
    ) -> anyhow::Result<()>;

    /// Resolve a token digest to its owner and stamp `last_used_at`.
    async fn user_for_token(
        &self,
        token_hash: &str,
        at: DateTime<Utc>,
    ) -> anyhow::Result<Option<User>>;

    /// Returns true if a token row was removed.
    async fn delete_token(&self, token_hash: &str) -> anyhow::Result<bool>;
}
