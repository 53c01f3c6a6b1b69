// src/application/note_creator.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteDraft};

pub struct NoteCreator<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a note from a draft and return it with its new id
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        self.repository.create_note(draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteTag;
    use crate::util::testing::MockNoteRepository;

    #[tokio::test]
    async fn given_draft_when_creating_then_returns_note_with_assigned_id() {
        // Arrange
        let mock = MockNoteRepository::builder().with_next_id(100).build();
        let creator = NoteCreator::new(mock);
        let draft = NoteDraft::new("Call dentist", "Before Friday", NoteTag::Personal);

        // Act
        let note = creator.create_note(&draft).await.unwrap();

        // Assert
        assert_eq!(note.id, 100);
        assert_eq!(note.title, draft.title);
        assert_eq!(note.content, draft.content);
        assert_eq!(note.tag, draft.tag);
    }

    #[tokio::test]
    async fn given_two_drafts_when_creating_then_ids_differ() {
        // Arrange
        let mock = MockNoteRepository::builder().build();
        let creator = NoteCreator::new(mock);
        let draft = NoteDraft::new("Same", "Same", NoteTag::Todo);

        // Act
        let first = creator.create_note(&draft).await.unwrap();
        let second = creator.create_note(&draft).await.unwrap();

        // Assert
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn given_missing_token_when_creating_then_returns_config_error() {
        // Arrange
        let mock = MockNoteRepository::builder().without_token().build();
        let creator = NoteCreator::new(mock);
        let draft = NoteDraft::new("Title", "Body", NoteTag::Work);

        // Act
        let result = creator.create_note(&draft).await;

        // Assert
        assert!(matches!(result, Err(DomainError::ConfigError(_))));
    }
}
