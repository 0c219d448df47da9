//! Configuration for [`UserManager`](crate::UserManager) instances.
//!
//! The only required setting is the project identifier. The base URL defaults
//! to the public Identity Toolkit endpoint and can be pointed elsewhere per
//! instance, for example at a local emulator.

use crate::error::{AdminError, AdminResult};
use std::env;
use std::time::Duration;
use url::Url;

/// Default root of the identity endpoint.
pub const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1/";

/// Environment variable holding the project identifier.
pub const PROJECT_ID_ENV: &str = "IDENTITY_PROJECT_ID";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "IDENTITY_BASE_URL";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "IDENTITY_TIMEOUT_SECS";

/// Settings a user manager is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserManagerConfig {
    /// Project (tenant) all accounts are scoped to.
    pub project_id: String,

    /// Root URL requests are resolved against.
    pub base_url: String,

    /// Per-request timeout applied by the HTTP client. `None` means no timeout.
    pub timeout: Option<Duration>,
}

impl UserManagerConfig {
    /// Config for `project_id` with the default base URL and no timeout.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Read the config from `IDENTITY_PROJECT_ID`, `IDENTITY_BASE_URL` and
    /// `IDENTITY_TIMEOUT_SECS`.
    pub fn from_env() -> AdminResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AdminResult<Self> {
        let project_id = lookup(PROJECT_ID_ENV)
            .ok_or_else(|| AdminError::configuration(format!("{} is not set", PROJECT_ID_ENV)))?;

        let mut config = Self::new(project_id);
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            let seconds = timeout.parse::<u64>().map_err(|_| {
                AdminError::configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_ENV, timeout
                ))
            })?;
            config.timeout = Some(Duration::from_secs(seconds));
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the project id and return the normalized base URL.
    ///
    /// A trailing `/` is added to the base URL so relative request paths
    /// extend it instead of replacing its last segment.
    pub fn validate(&self) -> AdminResult<Url> {
        validate_project_id(&self.project_id)?;

        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        let url = Url::parse(&base).map_err(|e| {
            AdminError::configuration(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(AdminError::configuration(format!(
                "Base URL '{}' cannot have paths joined onto it",
                self.base_url
            )));
        }
        Ok(url)
    }
}

pub(crate) fn validate_project_id(project_id: &str) -> AdminResult<()> {
    if project_id.trim().is_empty() {
        return Err(AdminError::configuration("Project id cannot be empty"));
    }
    // The id becomes a path segment; anything else would reroute the request.
    if !project_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(AdminError::configuration(format!(
            "Project id '{}' may only contain ASCII letters, digits and '-'",
            project_id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = UserManagerConfig::new("demo");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
        assert_eq!(config.validate().unwrap().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_added() {
        let mut config = UserManagerConfig::new("demo");
        config.base_url = "http://localhost:9099/identitytoolkit.googleapis.com/v1".to_string();
        assert_eq!(
            config.validate().unwrap().as_str(),
            "http://localhost:9099/identitytoolkit.googleapis.com/v1/"
        );
    }

    #[test]
    fn test_invalid_settings() {
        assert!(UserManagerConfig::new("").validate().is_err());
        assert!(UserManagerConfig::new("a/b").validate().is_err());

        let mut config = UserManagerConfig::new("demo");
        config.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(AdminError::Configuration { .. })
        ));
    }

    #[test]
    fn test_project_id_must_be_a_single_path_segment() {
        for project_id in ["demo?x", "demo#frag", "demo x", "demo%2F", "../demo", "demo.prod"] {
            assert!(
                matches!(
                    UserManagerConfig::new(project_id).validate(),
                    Err(AdminError::Configuration { .. })
                ),
                "{} should be rejected",
                project_id
            );
        }
        assert!(UserManagerConfig::new("demo-project-42").validate().is_ok());
        assert!(UserManagerConfig::new("Demo").validate().is_ok());
    }

    #[test]
    fn test_from_lookup() {
        let config = UserManagerConfig::from_lookup(lookup(&[
            (PROJECT_ID_ENV, "demo"),
            (BASE_URL_ENV, "http://localhost:9099/"),
            (TIMEOUT_ENV, "30"),
        ]))
        .unwrap();

        assert_eq!(config.project_id, "demo");
        assert_eq!(config.base_url, "http://localhost:9099/");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_from_lookup_requires_project() {
        assert!(UserManagerConfig::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let result =
            UserManagerConfig::from_lookup(lookup(&[(PROJECT_ID_ENV, "demo"), (TIMEOUT_ENV, "soon")]));
        assert!(matches!(result, Err(AdminError::Configuration { .. })));
    }
}
