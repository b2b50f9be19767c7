use async_trait::async_trait;
use auth::contract::User;

use crate::contract::{
    error::NotesError,
    model::{Note, NoteDraft},
};

/// Public API trait for the notes module that other modules can use.
/// Every call acts on behalf of an already authenticated `owner`.
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn list_notes(&self, owner: &User) -> Result<Vec<Note>, NotesError>;

    async fn get_note(&self, owner: &User, id: i32) -> Result<Note, NotesError>;

    async fn create_note(&self, owner: &User, draft: NoteDraft) -> Result<Note, NotesError>;

    async fn update_note(&self, owner: &User, id: i32, draft: NoteDraft)
        -> Result<Note, NotesError>;

    async fn delete_note(&self, owner: &User, id: i32) -> Result<(), NotesError>;
}
