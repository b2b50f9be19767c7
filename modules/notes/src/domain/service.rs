use std::sync::Arc;

use auth::contract::User;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::contract::model::{Note, NoteDraft};
use crate::domain::error::DomainError;
use crate::domain::repo::{NewNoteRecord, NotesRepository};
use crate::domain::validation::validate_draft;

/// Owner-scoped note operations. Depends only on the repository port.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn NotesRepository>,
    config: ServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_title_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_title_length: 255,
        }
    }
}

impl Service {
    pub fn new(repo: Arc<dyn NotesRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    #[instrument(name = "notes.service.list_notes", skip(self, owner), fields(user_id = owner.id))]
    pub async fn list_notes(&self, owner: &User) -> Result<Vec<Note>, DomainError> {
        let notes = self
            .repo
            .find_by_owner(owner.id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }

    #[instrument(name = "notes.service.get_note", skip(self, owner), fields(user_id = owner.id))]
    pub async fn get_note(&self, owner: &User, id: i32) -> Result<Note, DomainError> {
        self.owned_note(owner, id).await
    }

    #[instrument(name = "notes.service.create_note", skip_all, fields(user_id = owner.id))]
    pub async fn create_note(&self, owner: &User, draft: NoteDraft) -> Result<Note, DomainError> {
        let draft = normalize(draft);
        self.validate(&draft)?;

        let note = self
            .repo
            .insert(NewNoteRecord {
                user_id: owner.id,
                title: draft.title,
                content: draft.content,
                created_at: Utc::now(),
            })
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!(note_id = note.id, "Created note");
        Ok(note)
    }

    /// Existence and ownership are checked before the draft is validated.
    #[instrument(name = "notes.service.update_note", skip(self, owner, draft), fields(user_id = owner.id))]
    pub async fn update_note(
        &self,
        owner: &User,
        id: i32,
        draft: NoteDraft,
    ) -> Result<Note, DomainError> {
        let mut note = self.owned_note(owner, id).await?;

        let draft = normalize(draft);
        self.validate(&draft)?;

        note.title = draft.title;
        note.content = draft.content;
        note.updated_at = Utc::now();

        let note = self
            .repo
            .update(note)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!(note_id = note.id, "Updated note");
        Ok(note)
    }

    #[instrument(name = "notes.service.delete_note", skip(self, owner), fields(user_id = owner.id))]
    pub async fn delete_note(&self, owner: &User, id: i32) -> Result<(), DomainError> {
        self.owned_note(owner, id).await?;

        let removed = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !removed {
            return Err(DomainError::not_found(id));
        }

        info!(note_id = id, "Deleted note");
        Ok(())
    }

    async fn owned_note(&self, owner: &User, id: i32) -> Result<Note, DomainError> {
        let note = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::not_found(id))?;

        if note.user_id != owner.id {
            warn!(note_id = id, owner_id = note.user_id, "Access to foreign note denied");
            return Err(DomainError::forbidden(id));
        }
        Ok(note)
    }

    fn validate(&self, draft: &NoteDraft) -> Result<(), DomainError> {
        validate_draft(draft, self.config.max_title_length)
            .into_result()
            .map_err(DomainError::validation)
    }
}

fn normalize(draft: NoteDraft) -> NoteDraft {
    NoteDraft {
        title: draft.title.trim().to_string(),
        content: draft.content.trim().to_string(),
    }
}
