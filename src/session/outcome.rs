//! Request outcomes and their transcript messages.

use crate::error::TransportError;

/// Transport-level failure classes shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    NotModified,
    ParseError,
    GenericError,
}

impl FailureKind {
    /// Classify a network collaborator status string.
    pub fn from_status(status: &str) -> Self {
        match status {
            "timeout" => Self::Timeout,
            "notmodified" => Self::NotModified,
            "parsererror" => Self::ParseError,
            _ => Self::GenericError,
        }
    }

    /// Status string this kind is reported under.
    pub fn status(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::NotModified => "notmodified",
            Self::ParseError => "parsererror",
            Self::GenericError => "error",
        }
    }

    /// Human-readable message rendered after the `ERROR: ` prefix.
    pub fn message(self) -> &'static str {
        match self {
            Self::Timeout => "Server timeout. Try again later.",
            Self::NotModified => "Server did not response properly. Try again.",
            Self::ParseError => "Client error. Try again.",
            Self::GenericError => "A server error has occured. Check your command.",
        }
    }
}

/// Result of one submission cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(String),
    Failure(FailureKind),
}

impl RequestOutcome {
    /// Classify a transport result.
    pub fn from_result(result: Result<String, TransportError>) -> Self {
        match result {
            Ok(body) => Self::Success(body),
            Err(err) => {
                let kind = err.failure_kind();
                tracing::warn!(error = %err, status = kind.status(), "command request failed");
                Self::Failure(kind)
            }
        }
    }

    /// Text appended to the transcript for this outcome.
    pub fn into_transcript_text(self) -> String {
        match self {
            Self::Success(body) => body,
            Self::Failure(kind) => format!("ERROR: {}", kind.message()),
        }
    }
}
