//! Shared test utilities for user manager integration tests.
//!
//! [`MockHttpClient`] replays scripted responses in order and records every
//! request it receives, so tests can assert on exactly what was sent.

#![allow(dead_code)]

use identity_admin::{HttpClient, HttpResponse, TransportError, UserManager};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const PROJECT_ID: &str = "test-project";

/// A request as seen by the mock transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

#[derive(Debug)]
enum Scripted {
    Response(HttpResponse),
    Failure(String),
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<Scripted>,
    requests: Vec<RecordedRequest>,
}

/// Scripted, recording HTTP client.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<RwLock<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and JSON body.
    pub async fn respond(&self, status: u16, body: Value) -> &Self {
        self.state
            .write()
            .await
            .responses
            .push_back(Scripted::Response(HttpResponse::new(status, Some(body))));
        self
    }

    /// Queue a response with no body.
    pub async fn respond_empty(&self, status: u16) -> &Self {
        self.state
            .write()
            .await
            .responses
            .push_back(Scripted::Response(HttpResponse::new(status, None)));
        self
    }

    /// Queue a transport failure.
    pub async fn fail(&self, message: &str) -> &Self {
        self.state
            .write()
            .await
            .responses
            .push_back(Scripted::Failure(message.to_string()));
        self
    }

    /// All requests received so far, in order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.read().await.requests.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.state.read().await.requests.len()
    }

    async fn dispatch(&self, request: RecordedRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.write().await;
        state.requests.push(request);

        match state.responses.pop_front() {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Failure(message)) => Err(TransportError::Credentials { message }),
            None => panic!("MockHttpClient received a request with no scripted response"),
        }
    }
}

impl HttpClient for MockHttpClient {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        self.dispatch(RecordedRequest {
            method: "GET",
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: None,
        })
        .await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<HttpResponse, TransportError> {
        self.dispatch(RecordedRequest {
            method: "POST",
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
        .await
    }
}

/// A manager for [`PROJECT_ID`] bound to a fresh mock client.
pub fn manager() -> (UserManager<MockHttpClient>, MockHttpClient) {
    init_logging();
    let client = MockHttpClient::new();
    let manager = UserManager::with_client(PROJECT_ID, client.clone())
        .expect("test project id is valid");
    (manager, client)
}

/// Full request path for an endpoint under the test project.
pub fn path(endpoint: &str) -> String {
    format!("projects/{}/{}", PROJECT_ID, endpoint)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
