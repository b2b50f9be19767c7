use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::register,
        handlers::login,
        handlers::logout,
        handlers::me,
    ),
    components(schemas(
        dto::UserDto,
        dto::RegisterReq,
        dto::LoginReq,
        dto::RegisterResp,
        dto::LoginResp,
        dto::UserResp,
        dto::MessageResp,
    )),
    tags((name = "auth", description = "Registration and bearer tokens"))
)]
pub struct AuthApiDoc;
