use notehub::domain::{AuthToken, Note, NoteTag};
use notehub::infrastructure::NoteHubRepository;
use std::num::NonZeroU32;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const NOTES_PATH: &str = "/api/notes";

/// Local stand-in for the NoteHub API
pub struct TestServer {
    pub server: MockServer,
}

#[allow(dead_code)]
impl TestServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), NOTES_PATH)
    }

    /// Repository pointing at this server, with the test token
    pub fn repository(&self) -> NoteHubRepository {
        let token = AuthToken::new(TOKEN).expect("valid token");
        NoteHubRepository::new(&self.base_url(), Some(token)).expect("valid base URL")
    }

    /// Repository pointing at this server, without any token
    pub fn repository_without_token(&self) -> NoteHubRepository {
        NoteHubRepository::new(&self.base_url(), None).expect("valid base URL")
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

#[allow(dead_code)]
pub fn page(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).expect("page must be positive")
}

#[allow(dead_code)]
pub fn note(id: i64, title: &str, content: &str, tag: NoteTag) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        tag,
        created_at: None,
        updated_at: None,
    }
}
