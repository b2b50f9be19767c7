//! Client side of the notes service.
//!
//! Everything that talks to the server takes an explicit [`Session`]; there
//! is no ambient login state. The page-level flows (registration, compose,
//! dashboard) validate locally before any request goes out.

pub mod api;
pub mod compose;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod register;
pub mod session;
pub mod summarizer;

pub use api::NotesApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use model::{Note, NoteInput, UserInfo};
pub use session::{Session, SessionStore};
pub use summarizer::SummarizerClient;
