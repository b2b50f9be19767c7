use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{client::AuthApi, error::AuthError, model::User};
use crate::domain::service::Service;

/// In-process `AuthApi` delegating to the domain service.
pub struct AuthLocalClient {
    service: Arc<Service>,
}

impl AuthLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AuthApi for AuthLocalClient {
    async fn authenticate(&self, token: &str) -> Result<User, AuthError> {
        self.service.authenticate(token).await.map_err(Into::into)
    }

    async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        self.service.logout(Some(token)).await.map_err(Into::into)
    }
}
