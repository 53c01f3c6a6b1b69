// src/infrastructure/notehub.rs
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::application::NoteRepository;
use crate::domain::{
    AuthToken, DomainError, Note, NoteDraft, NotesPage, Operation, TransportFailure,
};
use crate::infrastructure::config::Config;

/// Query string of a listing request. `search` is left out entirely when empty.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ListParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<&'a str>,
    pub page: u32,
}

impl<'a> ListParams<'a> {
    pub fn new(query: &'a str, page: NonZeroU32) -> Self {
        Self {
            search: (!query.is_empty()).then_some(query),
            page: page.get(),
        }
    }
}

/// NoteRepository backed by the NoteHub REST API.
///
/// The token is injected at construction. When it is absent every operation
/// fails with `ConfigError` before a request is built.
#[derive(Debug, Clone)]
pub struct NoteHubRepository {
    client: Client,
    base_url: String,
    token: Option<AuthToken>,
}

impl NoteHubRepository {
    pub fn new(base_url: &str, token: Option<AuthToken>) -> Result<Self, DomainError> {
        Self::with_client(Client::new(), base_url, token)
    }

    pub fn with_client(
        client: Client,
        base_url: &str,
        token: Option<AuthToken>,
    ) -> Result<Self, DomainError> {
        let base_url = base_url.trim().trim_end_matches('/');
        Url::parse(base_url).map_err(|e| {
            DomainError::ConfigError(format!("Invalid base URL '{}': {}", base_url, e))
        })?;

        debug!(%base_url, has_token = token.is_some(), "Creating NoteHubRepository");
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let client = build_client(config.timeout())?;
        Self::with_client(client, &config.api.base_url, config.auth_token())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> Result<&AuthToken, DomainError> {
        self.token.as_ref().ok_or_else(|| {
            error!("NoteHub token is missing");
            DomainError::ConfigError(format!(
                "NoteHub token is missing, set {} or api.token in the config file",
                crate::constants::TOKEN_ENV_VAR
            ))
        })
    }

    /// Request with the headers every NoteHub call carries
    fn authorized(&self, method: Method, url: &str) -> Result<RequestBuilder, DomainError> {
        let token = self.token()?;
        Ok(self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, token.bearer()))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T, DomainError> {
        let response = request
            .send()
            .await
            .map_err(|e| fail(operation, TransportFailure::Request(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(fail(
                operation,
                TransportFailure::Status {
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| fail(operation, TransportFailure::Request(e)))?;
        serde_json::from_str(&body).map_err(|e| fail(operation, TransportFailure::Decode(e)))
    }
}

fn fail(operation: Operation, failure: TransportFailure) -> DomainError {
    error!(
        operation = operation.as_str(),
        status = failure.status(),
        error = %failure,
        "NoteHub request failed"
    );
    DomainError::transport(operation, failure)
}

fn build_client(timeout: Option<Duration>) -> Result<Client, DomainError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}

impl NoteRepository for NoteHubRepository {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self, query: &str, page: NonZeroU32) -> Result<NotesPage, DomainError> {
        let request = self
            .authorized(Method::GET, &self.base_url)?
            .query(&ListParams::new(query, page));

        let result: NotesPage = self.execute(Operation::ListNotes, request).await?;
        debug!(
            count = result.notes.len(),
            total_pages = result.total_pages,
            "Listed notes"
        );
        Ok(result)
    }

    #[instrument(level = "debug", skip(self, draft), fields(tag = %draft.tag))]
    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        let request = self.authorized(Method::POST, &self.base_url)?.json(draft);

        let note: Note = self.execute(Operation::CreateNote, request).await?;
        info!(note_id = note.id, "Created note");
        Ok(note)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_note(&self, id: i64) -> Result<Note, DomainError> {
        let url = format!("{}/{}", self.base_url, id);
        let request = self.authorized(Method::DELETE, &url)?;

        let note: Note = self.execute(Operation::DeleteNote, request).await?;
        info!(note_id = note.id, "Deleted note");
        Ok(note)
    }
}
