//! Command transport: delivers one submitted command to the endpoint.
//!
//! The [`CommandTransport`] trait lets tests script responses without network
//! calls while the production path uses [`HttpTransport`].

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::TransportError;

mod http;

pub use http::HttpTransport;

/// One command submission as it goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub url: String,
    /// HTTP method, upper-case.
    pub method: String,
    /// Form fields, including the command under the input field name.
    pub fields: BTreeMap<String, String>,
}

/// Minimal endpoint interface used by the session loop.
#[async_trait]
pub trait CommandTransport: Send + Sync {
    /// Send the request and return the plain-text response body.
    async fn send(&self, request: &CommandRequest) -> Result<String, TransportError>;
}
