use async_trait::async_trait;

use crate::contract::{error::AuthError, model::User};

/// Public API of the auth module used by other modules.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Resolve a bearer token to its user.
    async fn authenticate(&self, token: &str) -> Result<User, AuthError>;

    /// Revoke a token. Unknown tokens are not an error.
    async fn revoke(&self, token: &str) -> Result<(), AuthError>;
}
