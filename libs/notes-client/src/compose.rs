//! Draft of a new note with an optional, user-editable summary.

use crate::api::NotesApiClient;
use crate::error::ClientError;
use crate::model::{Note, NoteInput};
use crate::session::Session;
use crate::summarizer::SummarizerClient;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compose {
    pub title: String,
    pub content: String,
    pub summary: String,
}

impl Compose {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            summary: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.title.trim().is_empty() {
            return Err(ClientError::invalid("title", "Please enter a title"));
        }
        if self.content.trim().is_empty() {
            return Err(ClientError::invalid("content", "Please enter some content"));
        }
        Ok(())
    }

    /// The summary wins when it has text, otherwise the content is saved.
    pub fn to_input(&self) -> NoteInput {
        let summary = self.summary.trim();
        let content = if summary.is_empty() {
            self.content.trim()
        } else {
            summary
        };
        NoteInput {
            title: self.title.trim().to_string(),
            content: content.to_string(),
        }
    }

    /// Fill `summary` from the summarizer. On failure the draft is unchanged.
    pub async fn generate_summary(
        &mut self,
        summarizer: &SummarizerClient,
    ) -> Result<&str, ClientError> {
        let summary = summarizer.summarize(&self.content).await?;
        self.summary = summary;
        Ok(&self.summary)
    }

    pub async fn save(
        &self,
        api: &NotesApiClient,
        session: Option<&Session>,
    ) -> Result<Note, ClientError> {
        self.validate()?;
        let session = session.ok_or(ClientError::NotLoggedIn)?;
        api.create_note(session, &self.to_input()).await
    }
}
