//! Password value object for raw account passwords.

use crate::error::{ValidationError, ValidationResult};
use std::fmt;

/// A raw password meeting the server's minimum length.
///
/// The value is sent to the endpoint as-is and hashed server-side. `Debug`
/// and `Display` never print it.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Minimum password length accepted by the identity endpoint.
    pub const MIN_LENGTH: usize = 6;

    /// Create a new Password with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        if value.chars().count() < Self::MIN_LENGTH {
            return Err(ValidationError::PasswordTooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(value))
    }

    /// Expose the raw password.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl TryFrom<&str> for Password {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
