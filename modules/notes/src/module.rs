use std::sync::Arc;

use auth::contract::AuthApi;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::api::rest::{openapi::NotesApiDoc, routes};
use crate::config::NotesConfig;
use crate::contract::client::NotesApi;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::NotesLocalClient;
use crate::infra::storage::{migrations::Migrator, sea_orm_repo::SeaOrmNotesRepository};

/// Notes module: owner-scoped CRUD behind the auth bearer gate.
#[derive(Clone)]
pub struct NotesModule {
    service: Arc<Service>,
    client: Arc<dyn NotesApi>,
    auth: Arc<dyn AuthApi>,
}

impl NotesModule {
    pub const NAME: &'static str = "notes";

    pub async fn init(
        db: DatabaseConnection,
        cfg: NotesConfig,
        auth: Arc<dyn AuthApi>,
    ) -> anyhow::Result<Self> {
        info!("Initializing notes module");
        debug!("Loaded notes config: max_title_length={}", cfg.max_title_length);
        cfg.validate()?;

        Self::migrate(&db).await?;

        let repo = SeaOrmNotesRepository::new(db);
        let service = Arc::new(Service::new(
            Arc::new(repo),
            ServiceConfig {
                max_title_length: cfg.max_title_length,
            },
        ));
        let client: Arc<dyn NotesApi> = Arc::new(NotesLocalClient::new(service.clone()));

        Ok(Self {
            service,
            client,
            auth,
        })
    }

    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running notes database migrations");
        Migrator::up(db, None).await?;
        info!("Notes database migrations completed successfully");
        Ok(())
    }

    pub fn client(&self) -> Arc<dyn NotesApi> {
        self.client.clone()
    }

    pub fn router(&self) -> axum::Router {
        info!("Registering notes REST routes");
        routes::router(self.service.clone(), self.auth.clone())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        NotesApiDoc::openapi()
    }
}
