//! Credential sources for signing outgoing requests.
//!
//! Acquiring tokens (service account exchange, metadata server, refresh) is
//! outside this crate. A [`CredentialProvider`] only has to hand back a bearer
//! token when asked.

use crate::http::TransportError;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Source of OAuth2 bearer tokens for the identity endpoint.
pub trait CredentialProvider: Send + Sync {
    /// Return a currently valid access token.
    fn access_token(&self) -> impl Future<Output = Result<String, TransportError>> + Send;
}

impl<T: CredentialProvider> CredentialProvider for Arc<T> {
    fn access_token(&self) -> impl Future<Output = Result<String, TransportError>> + Send {
        (**self).access_token()
    }
}

/// A fixed, pre-acquired access token.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wrap an access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

// Never print the token itself.
impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken").field(&"<redacted>").finish()
    }
}

impl CredentialProvider for StaticToken {
    async fn access_token(&self) -> Result<String, TransportError> {
        if self.0.is_empty() {
            return Err(TransportError::Credentials {
                message: "static access token is empty".to_string(),
            });
        }
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token() {
        let token = StaticToken::new("ya29.token");
        assert_eq!(token.access_token().await.unwrap(), "ya29.token");
    }

    #[tokio::test]
    async fn test_empty_static_token_is_rejected() {
        let token = StaticToken::new("");
        assert!(matches!(
            token.access_token().await,
            Err(TransportError::Credentials { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let token = StaticToken::new("secret-value");
        assert!(!format!("{:?}", token).contains("secret-value"));
    }
}
