use serde::{Deserialize, Serialize};

/// Upper bound of the `notes.title` column.
pub const TITLE_COLUMN_LENGTH: usize = 255;

/// Configuration for the notes module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotesConfig {
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            max_title_length: default_max_title_length(),
        }
    }
}

fn default_max_title_length() -> usize {
    TITLE_COLUMN_LENGTH
}

impl NotesConfig {
    /// Reject limits the storage cannot hold.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_title_length == 0 || self.max_title_length > TITLE_COLUMN_LENGTH {
            anyhow::bail!(
                "notes.max_title_length must be between 1 and {TITLE_COLUMN_LENGTH} (got {})",
                self.max_title_length
            );
        }
        Ok(())
    }
}
