//! PhotoUrl value object for a user's profile photo.

use crate::error::{ValidationError, ValidationResult};
use std::fmt;
use url::Url;

/// A validated absolute photo URL.
///
/// The original string is kept as given so the server stores exactly what the
/// caller supplied; parsing is only used to check the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoUrl(String);

impl PhotoUrl {
    /// Create a new PhotoUrl with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Get the URL string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned URL string.
    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::empty("photoUrl"));
        }

        let parsed = Url::parse(value).map_err(|e| ValidationError::InvalidPhotoUrl {
            value: value.to_string(),
            details: e.to_string(),
        })?;

        if !parsed.has_host() {
            return Err(ValidationError::InvalidPhotoUrl {
                value: value.to_string(),
                details: "URL has no host".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for PhotoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PhotoUrl {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(PhotoUrl::try_from("https://example.com/photo.png").is_ok());
        assert!(PhotoUrl::try_from("http://cdn.example.com:8080/a/b?size=64").is_ok());
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(matches!(
            PhotoUrl::try_from("/images/me.png"),
            Err(ValidationError::InvalidPhotoUrl { .. })
        ));
    }

    #[test]
    fn test_hostless_url_rejected() {
        assert!(matches!(
            PhotoUrl::try_from("mailto:someone@example.com"),
            Err(ValidationError::InvalidPhotoUrl { .. })
        ));
    }

    #[test]
    fn test_original_string_preserved() {
        let url = PhotoUrl::try_from("HTTPS://Example.com/Photo.png").unwrap();
        assert_eq!(url.as_str(), "HTTPS://Example.com/Photo.png");
    }
}
