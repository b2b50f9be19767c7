use async_trait::async_trait;
use auth::contract::User;
use std::sync::Arc;

use crate::contract::{
    client::NotesApi,
    error::NotesError,
    model::{Note, NoteDraft},
};
use crate::domain::service::Service;

/// Local implementation of the NotesApi trait that delegates to the domain service
pub struct NotesLocalClient {
    service: Arc<Service>,
}

impl NotesLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl NotesApi for NotesLocalClient {
    async fn list_notes(&self, owner: &User) -> Result<Vec<Note>, NotesError> {
        self.service.list_notes(owner).await.map_err(Into::into)
    }

    async fn get_note(&self, owner: &User, id: i32) -> Result<Note, NotesError> {
        self.service.get_note(owner, id).await.map_err(Into::into)
    }

    async fn create_note(&self, owner: &User, draft: NoteDraft) -> Result<Note, NotesError> {
        self.service
            .create_note(owner, draft)
            .await
            .map_err(Into::into)
    }

    async fn update_note(
        &self,
        owner: &User,
        id: i32,
        draft: NoteDraft,
    ) -> Result<Note, NotesError> {
        self.service
            .update_note(owner, id, draft)
            .await
            .map_err(Into::into)
    }

    async fn delete_note(&self, owner: &User, id: i32) -> Result<(), NotesError> {
        self.service.delete_note(owner, id).await.map_err(Into::into)
    }
}
