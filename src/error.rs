//! Unified error types for the terminal widget.

use std::fmt;

use crate::session::FailureKind;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// TransportError
// ---------------------------------------------------------------------------

/// Errors from the command transport.
#[derive(Debug)]
pub enum TransportError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the endpoint.
    Status(u16),
    /// Response body could not be read as text.
    Decode(String),
    /// Configured form method is not a valid HTTP method.
    InvalidMethod(String),
    /// A failure a custom [`CommandTransport`](crate::transport::CommandTransport)
    /// classified itself, e.g. one bridging a client that reports status
    /// strings (see [`FailureKind::from_status`]).
    Reported(FailureKind),
}

impl TransportError {
    /// Collapse this error onto the transcript-facing failure classification.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Http(inner) if inner.is_timeout() => FailureKind::Timeout,
            Self::Http(inner) if inner.is_decode() => FailureKind::ParseError,
            Self::Status(304) => FailureKind::NotModified,
            Self::Decode(_) => FailureKind::ParseError,
            Self::Reported(kind) => *kind,
            Self::Http(_) | Self::Status(_) | Self::InvalidMethod(_) => FailureKind::GenericError,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code) => write!(f, "status {code}"),
            Self::Decode(msg) => write!(f, "decode: {msg}"),
            Self::InvalidMethod(method) => write!(f, "invalid form method `{method}`"),
            Self::Reported(kind) => write!(f, "reported {}", kind.status()),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// HostError
// ---------------------------------------------------------------------------

/// Errors raised by the console host while driving the widget.
#[derive(Debug)]
pub enum HostError {
    Io(std::io::Error),
    Config(ConfigError),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for HostError {}

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for HostError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
