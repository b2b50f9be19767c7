//! HTTP edge of the server: owns the listener, the global middleware stack
//! and the merged OpenAPI document. Modules contribute routers and docs via
//! [`ApiIngress::mount`].

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    http::header,
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

mod config;
pub mod openapi;
pub mod request_id;
mod web;

pub use config::ApiIngressConfig;

pub struct ApiIngress {
    config: ApiIngressConfig,
    routes: Router,
    docs: Vec<utoipa::openapi::OpenApi>,
}

impl ApiIngress {
    pub fn new(config: ApiIngressConfig) -> Self {
        Self {
            config,
            routes: Router::new(),
            docs: Vec::new(),
        }
    }

    pub fn config(&self) -> &ApiIngressConfig {
        &self.config
    }

    /// Merge a module's routes and its OpenAPI fragment.
    pub fn mount(mut self, name: &str, router: Router, doc: utoipa::openapi::OpenApi) -> Self {
        tracing::debug!(module = name, paths = doc.paths.paths.len(), "Mounting module routes");
        self.routes = self.routes.merge(router);
        self.docs.push(doc);
        self
    }

    /// Merged OpenAPI document for everything mounted so far.
    pub fn openapi(&self) -> utoipa::openapi::OpenApi {
        openapi::build_openapi(self.docs.iter().cloned())
    }

    /// Build the final router: module routes, health, docs and the global layers.
    pub fn build_router(&self) -> Result<Router> {
        let mut router = self
            .routes
            .clone()
            .route("/health", get(web::health_check))
            .fallback(web::not_found);

        if self.config.enable_docs {
            let doc = Arc::new(serde_json::to_value(self.openapi())?);
            tracing::info!("Serving OpenAPI document at /openapi.json");
            router = router
                .route(
                    "/openapi.json",
                    get(move || {
                        let doc = doc.clone();
                        async move {
                            ([(header::CACHE_CONTROL, "no-store")], Json((*doc).clone()))
                                .into_response()
                        }
                    }),
                )
                .route("/docs", get(web::serve_docs));
        }

        // Layers are listed innermost first; the last one added runs first.
        router = router.layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes));

        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        router = router.layer(TimeoutLayer::new(Duration::from_secs(
            self.config.request_timeout_sec,
        )));

        // Request id into extensions and the current span
        router = router.layer(from_fn(request_id::push_req_id_to_extensions));

        router = router.layer(request_id::create_trace_layer());

        // Echo x-request-id on the response; set it first when the client sent none
        let x_request_id = request_id::header();
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router = router.layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId));

        Ok(router)
    }

    /// Bind `addr` and serve until `shutdown` resolves.
    pub async fn serve<F>(&self, addr: SocketAddr, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind {addr}: {e}"))?;
        self.serve_on(listener, shutdown).await
    }

    /// Serve on an already bound listener (tests bind port 0).
    pub async fn serve_on<F>(&self, listener: tokio::net::TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router()?;
        tracing::info!("HTTP server bound on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("HTTP server shutting down gracefully");
            })
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}
