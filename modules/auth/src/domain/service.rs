use std::sync::Arc;

use apikit::Violations;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::contract::model::{Credentials, IssuedToken, NewRegistration, User};
use crate::domain::credentials::{generate_token, hash_password, token_digest, verify_password};
use crate::domain::error::DomainError;
use crate::domain::repo::{AuthRepository, EmailTaken, NewUserRecord};
use crate::domain::validation::{
    confirmed, email_shape, max_chars, min_chars, normalize_email, required, unique_email,
};

/// Registration, login and bearer-token resolution.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn AuthRepository>,
    config: ServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_name_length: usize,
    pub max_email_length: usize,
    pub min_password_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 255,
            max_email_length: 255,
            min_password_length: 8,
        }
    }
}

impl Service {
    pub fn new(repo: Arc<dyn AuthRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    #[instrument(name = "auth.service.register", skip_all, fields(email = %form.email))]
    pub async fn register(&self, form: NewRegistration) -> Result<User, DomainError> {
        info!("Registering new user");

        let email = normalize_email(&form.email);
        let taken = if email.is_empty() {
            false
        } else {
            self.repo
                .email_exists(&email)
                .await
                .map_err(|e| DomainError::database(e.to_string()))?
        };

        let mut v = Violations::new();
        v.check(required("name", &form.name))
            .check(max_chars("name", form.name.trim(), self.config.max_name_length))
            .check(required("email", &email))
            .check(max_chars("email", &email, self.config.max_email_length))
            .check(email_shape("email", &email))
            .check(unique_email("email", taken))
            .check(required("password", &form.password))
            .check(min_chars(
                "password",
                &form.password,
                self.config.min_password_length,
            ))
            .check(confirmed(
                "password",
                &form.password,
                &form.password_confirmation,
            ));
        v.into_result().map_err(DomainError::validation)?;

        let password = form.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .map_err(|e| DomainError::database(e.to_string()))?;

        let user = self
            .repo
            .insert_user(NewUserRecord {
                name: form.name.trim().to_string(),
                email,
                password_hash,
                created_at: Utc::now(),
            })
            .await
            .map_err(|e| {
                if e.is::<EmailTaken>() {
                    warn!("Email registered concurrently");
                    DomainError::validation(unique_email("email", true).into_iter().collect())
                } else {
                    DomainError::database(e.to_string())
                }
            })?;

        info!(user_id = user.id, "Registered user");
        Ok(user)
    }

    #[instrument(name = "auth.service.login", skip_all, fields(email = %creds.email))]
    pub async fn login(&self, creds: Credentials) -> Result<IssuedToken, DomainError> {
        debug!("Login attempt");

        let email = normalize_email(&creds.email);
        let mut v = Violations::new();
        v.check(required("email", &email))
            .check(required("password", &creds.password));
        v.into_result().map_err(DomainError::validation)?;

        let stored = self
            .repo
            .find_by_email(&email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        let Some(stored) = stored else {
            warn!("Login failed");
            return Err(DomainError::InvalidCredentials);
        };
        let password = creds.password;
        let hash = stored.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !verified {
            warn!("Login failed");
            return Err(DomainError::InvalidCredentials);
        }

        let token = generate_token();
        self.repo
            .insert_token(stored.user.id, &token_digest(&token), Utc::now())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!(user_id = stored.user.id, "Issued access token");
        Ok(IssuedToken {
            token,
            user: stored.user,
        })
    }

    /// Revoke `token` if present. Absent or unknown tokens still succeed.
    #[instrument(name = "auth.service.logout", skip_all)]
    pub async fn logout(&self, token: Option<&str>) -> Result<(), DomainError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            debug!("Logout without token");
            return Ok(());
        };

        let removed = self
            .repo
            .delete_token(&token_digest(token))
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!(removed, "Logout processed");
        Ok(())
    }

    #[instrument(name = "auth.service.authenticate", skip_all)]
    pub async fn authenticate(&self, token: &str) -> Result<User, DomainError> {
        if token.is_empty() {
            return Err(DomainError::Unauthenticated);
        }

        self.repo
            .user_for_token(&token_digest(token), Utc::now())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or(DomainError::Unauthenticated)
    }
}
