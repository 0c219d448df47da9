//! PhoneNumber value object for a user's primary phone number.

use crate::error::{ValidationError, ValidationResult};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated E.164 phone number.
///
/// ## Validation Rules
///
/// - Leading `+`
/// - Followed by 1 to 15 ASCII digits, with no separators
///
/// ## Examples
///
/// ```rust
/// use identity_admin::user::value_objects::PhoneNumber;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let phone = PhoneNumber::new("+15551234567".to_string())?;
///     assert_eq!(phone.as_str(), "+15551234567");
///
///     assert!(PhoneNumber::new("555-1234".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Maximum number of digits in an E.164 number.
    pub const MAX_DIGITS: usize = 15;

    /// Create a new PhoneNumber with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Get the phone number.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned phone number.
    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::empty("phoneNumber"));
        }

        let digits = value.strip_prefix('+').ok_or_else(|| ValidationError::InvalidPhoneNumber {
            value: value.to_string(),
        })?;

        let well_formed = !digits.is_empty()
            && digits.len() <= Self::MAX_DIGITS
            && digits.chars().all(|c| c.is_ascii_digit());

        if !well_formed {
            return Err(ValidationError::InvalidPhoneNumber {
                value: value.to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
