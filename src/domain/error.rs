// src/domain/error.rs
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to {operation}")]
    TransportError {
        operation: Operation,
        #[source]
        source: TransportFailure,
    },
    #[error("Unknown tag '{0}', expected one of Todo, Work, Personal, Meeting, Shopping")]
    InvalidTag(String),
}

impl DomainError {
    pub fn transport(operation: Operation, source: impl Into<TransportFailure>) -> Self {
        DomainError::TransportError {
            operation,
            source: source.into(),
        }
    }

    /// HTTP status reported by the server, if the failure carried one
    pub fn status(&self) -> Option<u16> {
        match self {
            DomainError::TransportError { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// The remote call a transport failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListNotes,
    CreateNote,
    DeleteNote,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListNotes => "list notes",
            Operation::CreateNote => "create note",
            Operation::DeleteNote => "delete note",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum TransportFailure {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Server responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportFailure {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportFailure::Request(e) => e.status().map(|s| s.as_u16()),
            TransportFailure::Status { status, .. } => Some(*status),
            TransportFailure::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn given_404_status_when_checking_not_found_then_returns_true() {
        let err = DomainError::transport(
            Operation::DeleteNote,
            TransportFailure::Status {
                status: 404,
                body: r#"{"message":"Note not found"}"#.to_string(),
            },
        );

        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn given_config_error_when_checking_status_then_returns_none() {
        let err = DomainError::ConfigError("token missing".to_string());

        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }

    #[test]
    fn given_decode_failure_when_formatting_then_preserves_cause() {
        let cause = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = DomainError::transport(Operation::ListNotes, cause);

        assert_eq!(err.to_string(), "Failed to list notes");
        let source = err.source().expect("cause should be preserved");
        assert!(source.to_string().starts_with("Malformed response body"));
    }
}
