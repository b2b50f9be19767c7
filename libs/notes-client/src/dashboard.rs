//! The logged-in note list with a title filter, plus the view, edit and
//! delete flows that hang off it.
//!
//! The list is fetched once. Local state changes only after the server has
//! accepted a change.

use crate::api::NotesApiClient;
use crate::error::ClientError;
use crate::model::{Note, NoteInput};
use crate::session::Session;
use crate::summarizer::SummarizerClient;

pub const LOAD_FAILED: &str = "Failed to load notes";
pub const UPDATE_FAILED: &str = "Failed to update note";
pub const DELETE_FAILED: &str = "Failed to delete note";
pub const DETAIL_FAILED: &str = "Failed to load note details";

/// Notes whose title contains `query`, ignoring case. A blank query keeps all.
pub fn filter_by_title<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return notes.iter().collect();
    }
    notes
        .iter()
        .filter(|n| n.title.to_lowercase().contains(&query))
        .collect()
}

/// Working copy behind the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: i32,
    pub title: String,
    pub content: String,
}

impl From<&Note> for EditDraft {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}

impl EditDraft {
    /// Replace `content` with its summary. On failure the draft is unchanged.
    pub async fn summarize(&mut self, summarizer: &SummarizerClient) -> Result<(), ClientError> {
        self.content = summarizer.summarize(&self.content).await?;
        Ok(())
    }
}

pub struct Dashboard<'a> {
    api: &'a NotesApiClient,
    session: Session,
    notes: Vec<Note>,
    query: String,
}

impl<'a> Dashboard<'a> {
    /// Fetch the list. Without a session nothing is sent.
    pub async fn load(
        api: &'a NotesApiClient,
        session: Option<Session>,
    ) -> Result<Dashboard<'a>, ClientError> {
        let session = session.ok_or(ClientError::NotLoggedIn)?;
        let notes = api.list_notes(&session).await?;
        tracing::debug!(count = notes.len(), "dashboard loaded");
        Ok(Self {
            api,
            session,
            notes,
            query: String::new(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Notes shown for the current query.
    pub fn visible(&self) -> Vec<&Note> {
        filter_by_title(&self.notes, &self.query)
    }

    /// Full note from the server; the cached list entry is not reused.
    pub async fn view(&self, id: i32) -> Result<Note, ClientError> {
        self.api.get_note(&self.session, id).await
    }

    /// Only a note already in the list is replaced; the list never grows here.
    pub async fn edit(&mut self, draft: &EditDraft) -> Result<Note, ClientError> {
        let input = NoteInput {
            title: draft.title.clone(),
            content: draft.content.clone(),
        };
        let updated = self.api.update_note(&self.session, draft.id, &input).await?;

        if let Some(entry) = self.notes.iter_mut().find(|n| n.id == updated.id) {
            *entry = updated.clone();
        }
        Ok(updated)
    }

    pub async fn delete(&mut self, id: i32) -> Result<String, ClientError> {
        let message = self.api.delete_note(&self.session, id).await?;
        self.notes.retain(|n| n.id != id);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(id: i32, title: &str) -> Note {
        Note {
            id,
            user_id: 1,
            title: title.to_string(),
            content: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn filter_matches_title_substring_ignoring_case() {
        let notes = vec![note(1, "Team Meeting"), note(2, "Groceries")];

        let hits = filter_by_title(&notes, "Meet");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        assert_eq!(filter_by_title(&notes, "  GROC ").len(), 1);
        assert_eq!(filter_by_title(&notes, "   ").len(), 2);
        assert_eq!(filter_by_title(&notes, "").len(), 2);
        assert!(filter_by_title(&notes, "holiday").is_empty());
    }

    #[test]
    fn filter_ignores_content() {
        let mut n = note(1, "Plain");
        n.content = "meeting notes".to_string();
        assert!(filter_by_title(&[n], "meeting").is_empty());
    }
}
