use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_notes,
        handlers::create_note,
        handlers::get_note,
        handlers::update_note,
        handlers::delete_note,
    ),
    components(schemas(
        dto::NoteDto,
        dto::NoteReq,
        dto::NoteListResp,
        dto::NoteResp,
        dto::NoteMessageResp,
        dto::MessageResp,
    )),
    tags((name = "notes", description = "Notes owned by the authenticated user"))
)]
pub struct NotesApiDoc;
