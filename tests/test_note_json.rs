use anyhow::Result;
use notehub::domain::{Note, NoteDraft, NoteTag, NotesPage};

#[test]
fn given_note_when_serializing_to_json_then_uses_camel_case_fields() -> Result<()> {
    // Arrange
    let note = Note {
        id: 1234567890,
        title: "Test title".to_string(),
        content: "Test content".to_string(),
        tag: NoteTag::Personal,
        created_at: Some("2025-01-01T00:00:00Z".to_string()),
        updated_at: Some("2025-01-02T00:00:00Z".to_string()),
    };

    // Act
    let json = serde_json::to_string_pretty(&note)?;

    // Assert
    assert!(json.contains(r#""id": 1234567890"#));
    assert!(json.contains(r#""title": "Test title""#));
    assert!(json.contains(r#""tag": "Personal""#));
    assert!(json.contains(r#""createdAt""#));
    assert!(json.contains(r#""updatedAt""#));
    assert!(!json.contains(r#""created_at""#));
    Ok(())
}

#[test]
fn given_page_json_when_deserializing_then_reads_total_pages() -> Result<()> {
    // Arrange
    let raw = r#"{"notes":[{"id":1,"title":"A","content":"x","tag":"Todo"}],"totalPages":4}"#;

    // Act
    let page: NotesPage = serde_json::from_str(raw)?;

    // Assert
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.notes.len(), 1);
    assert_eq!(page.notes[0].tag, NoteTag::Todo);
    Ok(())
}

#[test]
fn given_unknown_tag_in_json_when_deserializing_then_fails() {
    // Arrange
    let raw = r#"{"id":1,"title":"A","content":"x","tag":"Errands"}"#;

    // Act
    let result = serde_json::from_str::<Note>(raw);

    // Assert
    assert!(result.is_err());
}

#[test]
fn given_draft_when_serializing_then_contains_only_draft_fields() -> Result<()> {
    // Arrange
    let draft = NoteDraft::new("T", "C", NoteTag::Meeting);

    // Act
    let value = serde_json::to_value(&draft)?;

    // Assert
    let keys: Vec<&String> = value.as_object().expect("object").keys().collect();
    assert_eq!(keys.len(), 3);
    assert_eq!(value["tag"], "Meeting");
    Ok(())
}
