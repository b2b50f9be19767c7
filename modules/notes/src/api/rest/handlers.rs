use std::sync::Arc;

use apikit::problem::ProblemResponse;
use auth::contract::User;
use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    Extension, Json,
};
use tracing::{error, info};

use crate::api::rest::dto::{
    MessageResp, NoteDto, NoteListResp, NoteMessageResp, NoteReq, NoteResp,
};
use crate::api::rest::error::map_domain_error;
use crate::domain::error::DomainError;
use crate::domain::service::Service;

fn reject(e: DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::Database { .. } => error!("Notes request failed: {}", e),
        _ => info!("Notes request rejected: {}", e),
    }
    map_domain_error(&e, instance)
}

/// List the caller's notes, newest first
#[utoipa::path(
    get,
    path = "/notes",
    tag = "notes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Notes of the authenticated user", body = NoteListResp),
        (status = 401, description = "Unauthenticated", body = apikit::Problem)
    )
)]
pub async fn list_notes(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Extension(user): Extension<User>,
) -> Result<Json<NoteListResp>, ProblemResponse> {
    let notes = svc
        .list_notes(&user)
        .await
        .map_err(|e| reject(e, uri.path()))?;
    Ok(Json(NoteListResp {
        notes: notes.into_iter().map(NoteDto::from).collect(),
    }))
}

/// Create a note
#[utoipa::path(
    post,
    path = "/notes",
    tag = "notes",
    security(("bearer_auth" = [])),
    request_body = NoteReq,
    responses(
        (status = 201, description = "Note created", body = NoteMessageResp),
        (status = 401, description = "Unauthenticated", body = apikit::Problem),
        (status = 422, description = "Validation failed", body = apikit::Problem)
    )
)]
pub async fn create_note(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Extension(user): Extension<User>,
    Json(req_body): Json<NoteReq>,
) -> Result<(StatusCode, Json<NoteMessageResp>), ProblemResponse> {
    let note = svc
        .create_note(&user, req_body.into())
        .await
        .map_err(|e| reject(e, uri.path()))?;
    Ok((
        StatusCode::CREATED,
        Json(NoteMessageResp {
            message: "Note created successfully".to_string(),
            note: note.into(),
        }),
    ))
}

/// Fetch one of the caller's notes
#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "notes",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note found", body = NoteResp),
        (status = 403, description = "Owned by another user", body = apikit::Problem),
        (status = 404, description = "Not Found", body = apikit::Problem)
    )
)]
pub async fn get_note(
    uri: Uri,
    Path(id): Path<i32>,
    Extension(svc): Extension<Arc<Service>>,
    Extension(user): Extension<User>,
) -> Result<Json<NoteResp>, ProblemResponse> {
    let note = svc
        .get_note(&user, id)
        .await
        .map_err(|e| reject(e, uri.path()))?;
    Ok(Json(NoteResp { note: note.into() }))
}

/// Replace title and content of a note
#[utoipa::path(
    put,
    path = "/notes/{id}",
    tag = "notes",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Note id")),
    request_body = NoteReq,
    responses(
        (status = 200, description = "Note updated", body = NoteMessageResp),
        (status = 403, description = "Owned by another user", body = apikit::Problem),
        (status = 404, description = "Not Found", body = apikit::Problem),
        (status = 422, description = "Validation failed", body = apikit::Problem)
    )
)]
pub async fn update_note(
    uri: Uri,
    Path(id): Path<i32>,
    Extension(svc): Extension<Arc<Service>>,
    Extension(user): Extension<User>,
    Json(req_body): Json<NoteReq>,
) -> Result<Json<NoteMessageResp>, ProblemResponse> {
    let note = svc
        .update_note(&user, id, req_body.into())
        .await
        .map_err(|e| reject(e, uri.path()))?;
    Ok(Json(NoteMessageResp {
        message: "Note updated successfully".to_string(),
        note: note.into(),
    }))
}

/// Permanently delete a note
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "notes",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted", body = MessageResp),
        (status = 403, description = "Owned by another user", body = apikit::Problem),
        (status = 404, description = "Not Found", body = apikit::Problem)
    )
)]
pub async fn delete_note(
    uri: Uri,
    Path(id): Path<i32>,
    Extension(svc): Extension<Arc<Service>>,
    Extension(user): Extension<User>,
) -> Result<Json<MessageResp>, ProblemResponse> {
    svc.delete_note(&user, id)
        .await
        .map_err(|e| reject(e, uri.path()))?;
    Ok(Json(MessageResp {
        message: "Note deleted successfully".to_string(),
    }))
}
