use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::contract::model::Note;

/// Row to insert; timestamps are stamped by the service.
#[derive(Debug, Clone)]
pub struct NewNoteRecord {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Persistence port for notes. Ownership checks live in the service, so
/// `find_by_id` returns notes regardless of owner.
#[async_trait]
pub trait NotesRepository: Send + Sync {
    /// Notes of `user_id`, newest first (ties by descending id).
    async fn find_by_owner(&self, user_id: i32) -> anyhow::Result<Vec<Note>>;

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Note>>;

    async fn insert(&self, record: NewNoteRecord) -> anyhow::Result<Note>;

    /// Persist title, content and updated_at of an existing note.
    async fn update(&self, note: Note) -> anyhow::Result<Note>;

    /// Returns true if a row was removed.
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
