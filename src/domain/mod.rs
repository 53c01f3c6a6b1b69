// src/domain/mod.rs
pub mod auth;
pub mod error;
pub mod note;

pub use auth::AuthToken;
pub use error::{DomainError, Operation, TransportFailure};
pub use note::{Note, NoteDraft, NoteTag, NotesPage};
