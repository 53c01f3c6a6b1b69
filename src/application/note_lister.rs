// src/application/note_lister.rs
use std::num::NonZeroU32;

use crate::application::NoteRepository;
use crate::domain::{DomainError, NotesPage};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List one page of notes, or search them
    ///
    /// # Arguments
    /// * `query` - Search term; empty lists everything
    /// * `page` - 1-based page number
    ///
    /// # Returns
    /// The notes on that page and the total page count
    pub async fn list_notes(&self, query: &str, page: NonZeroU32) -> Result<NotesPage, DomainError> {
        self.repository.list_notes(query, page).await
    }
}
