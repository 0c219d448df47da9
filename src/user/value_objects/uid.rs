//! Uid value object for user account identifiers.
//!
//! The identity endpoint calls this field `localId`. Uids are assigned by the
//! server when omitted on create, or chosen by the caller.

use crate::error::{ValidationError, ValidationResult};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated user identifier.
///
/// ## Validation Rules
///
/// - Must not be empty
/// - Must be at most 128 characters long
///
/// ## Examples
///
/// ```rust
/// use identity_admin::user::value_objects::Uid;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let uid = Uid::new("some-uid".to_string())?;
///     assert_eq!(uid.as_str(), "some-uid");
///
///     assert!(Uid::new("".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(String);

impl Uid {
    /// Longest uid accepted by the identity endpoint.
    pub const MAX_LENGTH: usize = 128;

    /// Create a new Uid with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Get the string representation of the Uid.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the Uid.
    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::empty("uid"));
        }

        let length = value.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                attribute: "uid".to_string(),
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Uid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl TryFrom<String> for Uid {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Uid {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_uid() {
        let uid = Uid::new("user-123".to_string()).unwrap();
        assert_eq!(uid.as_str(), "user-123");
        assert_eq!(uid.to_string(), "user-123");
    }

    #[test]
    fn test_empty_uid() {
        assert_eq!(
            Uid::new(String::new()),
            Err(ValidationError::empty("uid"))
        );
    }

    #[test]
    fn test_uid_length_limit() {
        assert!(Uid::new("a".repeat(128)).is_ok());

        match Uid::new("a".repeat(129)) {
            Err(ValidationError::TooLong { max, actual, .. }) => {
                assert_eq!(max, 128);
                assert_eq!(actual, 129);
            }
            other => panic!("Expected TooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let uid = Uid::try_from("abc").unwrap();
        assert_eq!(serde_json::to_value(&uid).unwrap(), serde_json::json!("abc"));
    }
}
