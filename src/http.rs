//! HTTP transport abstraction for the identity endpoint.
//!
//! The [`HttpClient`] trait is the seam between the user manager and the
//! network. It knows nothing about users: it signs and sends GET/POST requests
//! relative to a base URL and hands back the status code together with the
//! decoded JSON body. Interpreting that body is the manager's job.
//!
//! [`ReqwestHttpClient`] is the production implementation. Tests plug in their
//! own scripted implementation.

pub mod client;
pub mod credentials;

pub use client::ReqwestHttpClient;
pub use credentials::{CredentialProvider, StaticToken};

use serde_json::Value;
use std::fmt;
use std::future::Future;

/// Response returned by an [`HttpClient`].
///
/// The body is `None` when the server sent no content.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl HttpResponse {
    /// Create a new response.
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a top-level field of the decoded body.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.get(name))
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            Some(body) => write!(f, "HTTP {} {}", self.status, body),
            None => write!(f, "HTTP {} (empty body)", self.status),
        }
    }
}

/// Transport-level failures. These are never reinterpreted by the manager.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error("Response with status {status} is not valid JSON: {source}")]
    InvalidJson {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// A request path could not be resolved against the base URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Credentials could not produce an access token
    #[error("Credential error: {message}")]
    Credentials { message: String },
}

/// Authenticated HTTP client used by the user manager.
///
/// Paths are relative to the client's base URL. Implementations must be safe
/// for concurrent use; the manager shares a single client across calls.
pub trait HttpClient: Send + Sync {
    /// Issue a signed GET request with the given query parameters.
    fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;

    /// Issue a signed POST request with a JSON body.
    fn post(
        &self,
        path: &str,
        body: &Value,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
