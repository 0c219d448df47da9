//! Builder for [`UserManager`] instances backed by the reqwest client.

use crate::config::UserManagerConfig;
use crate::error::AdminResult;
use crate::http::{CredentialProvider, ReqwestHttpClient};
use crate::manager::UserManager;
use std::time::Duration;

/// Fluent builder over [`UserManagerConfig`].
///
/// ```rust,no_run
/// use identity_admin::{StaticToken, UserManagerBuilder};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let manager = UserManagerBuilder::new("my-project")
///     .base_url("http://localhost:9099/identitytoolkit.googleapis.com/v1")
///     .timeout(Duration::from_secs(10))
///     .build(StaticToken::new("owner"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UserManagerBuilder {
    config: UserManagerConfig,
}

impl UserManagerBuilder {
    /// Start a builder for `project_id` with default settings.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            config: UserManagerConfig::new(project_id),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: UserManagerConfig) -> Self {
        Self { config }
    }

    /// Override the endpoint root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Get the configuration built so far.
    pub fn config(&self) -> &UserManagerConfig {
        &self.config
    }

    /// Build the manager. Fails on invalid configuration; makes no requests.
    pub fn build<C: CredentialProvider>(
        self,
        credentials: C,
    ) -> AdminResult<UserManager<ReqwestHttpClient<C>>> {
        UserManager::from_config(self.config, credentials)
    }
}
