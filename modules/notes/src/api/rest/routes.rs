use std::sync::Arc;

use auth::{contract::AuthApi, require_bearer};
use axum::{middleware::from_fn_with_state, routing::get, Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Every notes route requires a bearer token resolved through `auth`.
pub fn router(service: Arc<Service>, auth: Arc<dyn AuthApi>) -> Router {
    Router::new()
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/notes/{id}",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
        .route_layer(from_fn_with_state(auth, require_bearer))
        .layer(Extension(service))
}
