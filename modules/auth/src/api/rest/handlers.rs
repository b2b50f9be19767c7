use std::sync::Arc;

use apikit::problem::ProblemResponse;
use axum::{
    http::{HeaderMap, StatusCode, Uri},
    Extension, Json,
};
use tracing::{error, info};

use crate::api::rest::dto::{
    LoginReq, LoginResp, MessageResp, RegisterReq, RegisterResp, UserDto, UserResp,
};
use crate::api::rest::error::map_domain_error;
use crate::api::rest::middleware::bearer_token;
use crate::contract::model::User;
use crate::domain::service::Service;

/// Register a new account
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "User registered", body = RegisterResp),
        (status = 422, description = "Validation failed", body = apikit::Problem),
        (status = 500, description = "Internal Server Error", body = apikit::Problem)
    )
)]
pub async fn register(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<RegisterReq>,
) -> Result<(StatusCode, Json<RegisterResp>), ProblemResponse> {
    match svc.register(req_body.into()).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(RegisterResp {
                message: "User registered successfully".to_string(),
                user: user.into(),
            }),
        )),
        Err(e) => {
            info!("Registration rejected: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Exchange email and password for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Token issued", body = LoginResp),
        (status = 401, description = "Invalid credentials", body = apikit::Problem),
        (status = 422, description = "Validation failed", body = apikit::Problem)
    )
)]
pub async fn login(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<LoginReq>,
) -> Result<Json<LoginResp>, ProblemResponse> {
    match svc.login(req_body.into()).await {
        Ok(issued) => Ok(Json(LoginResp {
            message: "Login successful".to_string(),
            token: issued.token,
            user: issued.user.into(),
        })),
        Err(e) => {
            info!("Login rejected: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Revoke the presented token; succeeds without one
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    security((), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageResp)
    )
)]
pub async fn logout(
    uri: Uri,
    headers: HeaderMap,
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<MessageResp>, ProblemResponse> {
    match svc.logout(bearer_token(&headers)).await {
        Ok(()) => Ok(Json(MessageResp {
            message: "Logged out successfully".to_string(),
        })),
        Err(e) => {
            error!("Failed to revoke token: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Profile of the authenticated user
#[utoipa::path(
    get,
    path = "/user",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResp),
        (status = 401, description = "Unauthenticated", body = apikit::Problem)
    )
)]
pub async fn me(Extension(user): Extension<User>) -> Json<UserResp> {
    Json(UserResp {
        user: UserDto::from(user),
    })
}
