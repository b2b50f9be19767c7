use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

// Response envelopes

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterResp {
    pub user: UserInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResp {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserResp {
    pub user: UserInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NoteListResp {
    pub notes: Vec<Note>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NoteResp {
    pub note: Note,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResp {
    pub message: String,
}
