// src/application/repository.rs
use std::future::Future;
use std::num::NonZeroU32;

use crate::domain::{DomainError, Note, NoteDraft, NotesPage};

/// Port to the remote note store.
///
/// Implementations hold no mutable state between calls, so one instance can
/// serve concurrent callers.
pub trait NoteRepository {
    /// Fetch one page of notes, filtered by `query` when it is non-empty
    fn list_notes(
        &self,
        query: &str,
        page: NonZeroU32,
    ) -> impl Future<Output = Result<NotesPage, DomainError>> + Send;

    /// Create a note and return it with its server-assigned id
    fn create_note(
        &self,
        draft: &NoteDraft,
    ) -> impl Future<Output = Result<Note, DomainError>> + Send;

    /// Delete a note and return the server's copy of it
    fn delete_note(&self, id: i64) -> impl Future<Output = Result<Note, DomainError>> + Send;
}
