use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::api::rest::{openapi::AuthApiDoc, routes};
use crate::config::AuthConfig;
use crate::contract::client::AuthApi;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::AuthLocalClient;
use crate::infra::storage::{migrations::Migrator, sea_orm_repo::SeaOrmAuthRepository};

/// Wires the auth repository, service, local client and REST routes together.
#[derive(Clone)]
pub struct AuthModule {
    service: Arc<Service>,
    client: Arc<dyn AuthApi>,
}

impl AuthModule {
    pub const NAME: &'static str = "auth";

    /// Run migrations and build the service on top of `db`.
    pub async fn init(db: DatabaseConnection, cfg: AuthConfig) -> anyhow::Result<Self> {
        info!("Initializing auth module");
        debug!(
            "Loaded auth config: min_password_length={}, max_name_length={}",
            cfg.min_password_length, cfg.max_name_length
        );

        Self::migrate(&db).await?;

        let repo = SeaOrmAuthRepository::new(db);
        let service_config = ServiceConfig {
            max_name_length: cfg.max_name_length,
            max_email_length: cfg.max_email_length,
            min_password_length: cfg.min_password_length,
        };
        let service = Arc::new(Service::new(Arc::new(repo), service_config));
        let client: Arc<dyn AuthApi> = Arc::new(AuthLocalClient::new(service.clone()));

        Ok(Self { service, client })
    }

    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running auth database migrations");
        Migrator::up(db, None).await?;
        info!("Auth database migrations completed successfully");
        Ok(())
    }

    /// In-process client for other modules (the bearer gate uses it).
    pub fn client(&self) -> Arc<dyn AuthApi> {
        self.client.clone()
    }

    pub fn router(&self) -> axum::Router {
        info!("Registering auth REST routes");
        routes::router(self.service.clone(), self.client.clone())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        AuthApiDoc::openapi()
    }
}
