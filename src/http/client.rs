//! reqwest-backed [`HttpClient`] implementation.

use crate::http::{CredentialProvider, HttpClient, HttpResponse, TransportError};
use log::trace;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Signed HTTP client for the identity endpoint.
///
/// Every request carries a bearer token obtained from the credential provider
/// at send time. Paths are joined onto the base URL, which must end with `/`
/// for relative joins to keep its last segment.
#[derive(Clone)]
pub struct ReqwestHttpClient<C> {
    client: reqwest::Client,
    base_url: Url,
    credentials: C,
}

impl<C: CredentialProvider> ReqwestHttpClient<C> {
    /// Build a client bound to `base_url`.
    pub fn new(
        base_url: Url,
        credentials: C,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            credentials,
        })
    }

    /// Get the base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn decode(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        if text.trim().is_empty() {
            return Ok(HttpResponse::new(status, None));
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|source| TransportError::InvalidJson { status, source })?;
        Ok(HttpResponse::new(status, Some(body)))
    }
}

impl<C> fmt::Debug for ReqwestHttpClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestHttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl<C: CredentialProvider> HttpClient for ReqwestHttpClient<C> {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let url = self.base_url.join(path)?;
        trace!("GET {}", url);

        let token = self.credentials.access_token().await?;
        let response = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<HttpResponse, TransportError> {
        let url = self.base_url.join(path)?;
        trace!("POST {}", url);

        let token = self.credentials.access_token().await?;
        let response = self
            .client
            .post(url)
            .json(body)
            .bearer_auth(token)
            .send()
            .await?;

        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StaticToken;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    // Accepts one connection, answers it with `reply` and yields the request head.
    async fn serve_once(reply: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        let base = Url::parse(&format!("http://{}/v1/", addr)).unwrap();
        (base, handle)
    }

    fn signed_client(base: Url) -> ReqwestHttpClient<StaticToken> {
        ReqwestHttpClient::new(base, StaticToken::new("tok"), Some(Duration::from_secs(5))).unwrap()
    }

    #[tokio::test]
    async fn test_get_signs_and_encodes_query() {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 12\r\nConnection: close\r\n\r\n{\"users\":[]}",
        )
        .await;

        let response = signed_client(base)
            .get("projects/p/accounts:batchGet", &[("maxResults", "1000")])
            .await
            .unwrap();
        assert_eq!(response, HttpResponse::new(200, Some(json!({"users": []}))));

        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /v1/projects/p/accounts:batchGet?maxResults=1000 HTTP/1.1\r\n"),
            "unexpected request line: {}",
            request
        );
        assert!(request.to_ascii_lowercase().contains("authorization: bearer tok\r\n"));
    }

    #[tokio::test]
    async fn test_empty_body_decodes_to_none() {
        let (base, server) =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").await;

        let response = signed_client(base)
            .get("projects/p/accounts:batchGet", &[])
            .await
            .unwrap();
        assert_eq!(response, HttpResponse::new(200, None));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_transport_error() {
        let (base, server) = serve_once(
            "HTTP/1.1 502 Bad Gateway\r\nContent-Type: text/html\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<html></html>",
        )
        .await;

        let result = signed_client(base)
            .get("projects/p/accounts:batchGet", &[])
            .await;
        match result {
            Err(TransportError::InvalidJson { status, .. }) => assert_eq!(status, 502),
            other => panic!("Expected InvalidJson, got {:?}", other),
        }
        server.await.unwrap();
    }

    fn client(base: &str) -> ReqwestHttpClient<StaticToken> {
        ReqwestHttpClient::new(Url::parse(base).unwrap(), StaticToken::new("token"), None).unwrap()
    }

    #[test]
    fn test_relative_paths_keep_base_segments() {
        let client = client("https://identitytoolkit.googleapis.com/v1/");
        let url = client
            .base_url()
            .join("projects/demo/accounts:lookup")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://identitytoolkit.googleapis.com/v1/projects/demo/accounts:lookup"
        );
    }

    #[test]
    fn test_debug_omits_credentials() {
        let client = client("http://localhost:9099/");
        let debug = format!("{:?}", client);
        assert!(debug.contains("localhost:9099"));
        assert!(!debug.contains("token"));
    }
}
