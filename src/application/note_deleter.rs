// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note and return the server's representation of it
    pub async fn delete_note(&self, note_id: i64) -> Result<Note, DomainError> {
        self.repository.delete_note(note_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteTag;
    use crate::util::testing::MockNoteRepository;

    #[tokio::test]
    async fn given_existing_note_when_deleting_then_returns_deleted_note() {
        // Arrange
        let mock = MockNoteRepository::builder()
            .with_note(Note {
                id: 123,
                title: "Old".to_string(),
                content: "Stale".to_string(),
                tag: NoteTag::Todo,
                created_at: None,
                updated_at: None,
            })
            .build();
        let deleter = NoteDeleter::new(mock);

        // Act
        let result = deleter.delete_note(123).await;

        // Assert
        let note = result.expect("Delete should succeed");
        assert_eq!(note.id, 123);
        assert_eq!(note.title, "Old");
    }

    #[tokio::test]
    async fn given_nonexistent_note_when_deleting_then_returns_not_found_transport_error() {
        // Arrange
        let mock = MockNoteRepository::builder().build();
        let deleter = NoteDeleter::new(mock);

        // Act
        let result = deleter.delete_note(999).await;

        // Assert
        let err = result.expect_err("Should return error");
        assert!(matches!(err, DomainError::TransportError { .. }));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn given_deleted_note_when_deleting_again_then_returns_not_found() {
        // Arrange
        let mock = MockNoteRepository::builder()
            .with_note(Note {
                id: 5,
                title: "Once".to_string(),
                content: "Only".to_string(),
                tag: NoteTag::Work,
                created_at: None,
                updated_at: None,
            })
            .build();
        let deleter = NoteDeleter::new(mock);

        // Act
        deleter.delete_note(5).await.expect("First delete should succeed");
        let second = deleter.delete_note(5).await;

        // Assert
        assert!(second.expect_err("Second delete should fail").is_not_found());
    }
}
