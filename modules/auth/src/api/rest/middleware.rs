//! Bearer-token gate shared by every authenticated route.

use std::sync::Arc;

use apikit::problem::{from_parts, ProblemResponse};
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::contract::{client::AuthApi, error::AuthError};

/// Extract the token from `Authorization: Bearer <token>` (scheme is case-insensitive).
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Resolve the bearer token to a `User` and insert it into request extensions.
///
/// Install with `axum::middleware::from_fn_with_state(auth, require_bearer)`.
pub async fn require_bearer(
    State(auth): State<Arc<dyn AuthApi>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ProblemResponse> {
    let instance = req.uri().path().to_string();

    let Some(token) = bearer_token(req.headers()) else {
        debug!("Request without bearer token");
        return Err(unauthenticated(&instance));
    };

    let user = match auth.authenticate(token).await {
        Ok(user) => user,
        Err(AuthError::Internal) => {
            return Err(from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                &instance,
            ))
        }
        Err(_) => return Err(unauthenticated(&instance)),
    };

    debug!(user_id = user.id, "Bearer token accepted");
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

fn unauthenticated(instance: &str) -> ProblemResponse {
    from_parts(
        StatusCode::UNAUTHORIZED,
        "AUTH_UNAUTHENTICATED",
        "Unauthenticated",
        "Unauthenticated.",
        instance,
    )
}
