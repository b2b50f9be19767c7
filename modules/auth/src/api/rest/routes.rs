use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Router,
};

use crate::api::rest::{handlers, middleware::require_bearer};
use crate::contract::client::AuthApi;
use crate::domain::service::Service;

/// `/register`, `/login` and `/logout` are public; `/user` sits behind the bearer gate.
pub fn router(service: Arc<Service>, auth: Arc<dyn AuthApi>) -> Router {
    let protected = Router::new()
        .route("/user", get(handlers::me))
        .route_layer(from_fn_with_state(auth, require_bearer));

    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .merge(protected)
        .layer(Extension(service))
}
