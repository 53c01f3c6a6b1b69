// src/util/testing.rs

use anyhow::Result;
use std::collections::{BTreeMap, HashMap};
use std::future::{ready, Future};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteDraft, NotesPage, Operation, TransportFailure};

/// In-memory NoteRepository for testing use cases without a server
///
/// Behaves like the remote service: listing filters on title and content,
/// creation assigns increasing ids, deleting an unknown id fails with a 404
/// transport error.
///
/// # Examples
///
/// ```
/// use notehub::util::testing::MockNoteRepository;
/// use notehub::domain::{Note, NoteTag};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(Note {
///         id: 123,
///         title: "Question".to_string(),
///         content: "Answer".to_string(),
///         tag: NoteTag::Todo,
///         created_at: None,
///         updated_at: None,
///     })
///     .with_next_id(500)
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Mutex<BTreeMap<i64, Note>>,
    pages: HashMap<(String, u32), NotesPage>,
    next_id: AtomicI64,
    has_token: bool,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    fn check_token(&self) -> Result<(), DomainError> {
        if self.has_token {
            Ok(())
        } else {
            Err(DomainError::ConfigError("NoteHub token is missing".to_string()))
        }
    }

    fn list_sync(&self, query: &str, page: NonZeroU32) -> Result<NotesPage, DomainError> {
        self.check_token()?;

        if let Some(configured) = self.pages.get(&(query.to_string(), page.get())) {
            return Ok(configured.clone());
        }

        let notes = self.notes.lock().unwrap_or_else(|e| e.into_inner());
        let matching: Vec<Note> = notes
            .values()
            .filter(|n| query.is_empty() || n.title.contains(query) || n.content.contains(query))
            .cloned()
            .collect();

        Ok(NotesPage {
            notes: if page.get() == 1 { matching } else { vec![] },
            total_pages: 1,
        })
    }

    fn create_sync(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        self.check_token()?;

        let note = Note {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: draft.title.clone(),
            content: draft.content.clone(),
            tag: draft.tag,
            created_at: None,
            updated_at: None,
        };
        let mut notes = self.notes.lock().unwrap_or_else(|e| e.into_inner());
        notes.insert(note.id, note.clone());
        Ok(note)
    }

    fn delete_sync(&self, id: i64) -> Result<Note, DomainError> {
        self.check_token()?;

        let mut notes = self.notes.lock().unwrap_or_else(|e| e.into_inner());
        notes.remove(&id).ok_or_else(|| {
            DomainError::transport(
                Operation::DeleteNote,
                TransportFailure::Status {
                    status: 404,
                    body: format!(r#"{{"message":"Note {} not found"}}"#, id),
                },
            )
        })
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_notes(
        &self,
        query: &str,
        page: NonZeroU32,
    ) -> impl Future<Output = Result<NotesPage, DomainError>> + Send {
        ready(self.list_sync(query, page))
    }

    fn create_note(
        &self,
        draft: &NoteDraft,
    ) -> impl Future<Output = Result<Note, DomainError>> + Send {
        ready(self.create_sync(draft))
    }

    fn delete_note(&self, id: i64) -> impl Future<Output = Result<Note, DomainError>> + Send {
        ready(self.delete_sync(id))
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: BTreeMap<i64, Note>,
    pages: HashMap<(String, u32), NotesPage>,
    next_id: i64,
    has_token: bool,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            pages: HashMap::new(),
            next_id: 1,
            has_token: true,
        }
    }

    /// Add a note that can be listed and deleted
    pub fn with_note(mut self, note: Note) -> Self {
        self.next_id = self.next_id.max(note.id + 1);
        self.notes.insert(note.id, note);
        self
    }

    /// Configure the exact result of list_notes for a query and page
    pub fn with_page(mut self, query: &str, page: u32, result: NotesPage) -> Self {
        self.pages.insert((query.to_string(), page), result);
        self
    }

    /// Id handed to the next created note
    pub fn with_next_id(mut self, id: i64) -> Self {
        self.next_id = id;
        self
    }

    /// Make every operation fail as if no token were configured
    pub fn without_token(mut self) -> Self {
        self.has_token = false;
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: Mutex::new(self.notes),
            pages: self.pages,
            next_id: AtomicI64::new(self.next_id),
            has_token: self.has_token,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "mio", "wiremock"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
