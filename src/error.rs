//! Error types for user management operations.
//!
//! Errors fall into three groups: local validation failures raised before any
//! request is built, remote outcome failures where the endpoint answered but
//! without the expected success marker, and transport failures propagated
//! unchanged from the HTTP client.

use crate::http::{HttpResponse, TransportError};

/// Main error type for user management operations.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// A caller-supplied value failed local validation. No request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// The create call completed but the response carried no `localId`.
    #[error("Failed to create user: {response}")]
    CreateUser { response: HttpResponse },

    /// The update call completed but the response carried no `localId`.
    #[error("Failed to update user: {response}")]
    UpdateUser { response: HttpResponse },

    /// The batch listing call returned a non-success status.
    #[error("Failed to list users: {response}")]
    ListUsers { response: HttpResponse },

    /// The custom claims update completed but the response carried no `localId`.
    #[error("Failed to set custom claims: {response}")]
    SetCustomClaims { response: HttpResponse },

    /// The lookup call returned a non-success status.
    #[error("Failed to look up user: {response}")]
    GetUser { response: HttpResponse },

    /// A user that was just written could not be read back.
    #[error("User not found: {uid}")]
    UserNotFound { uid: String },

    /// Network or decoding failure from the HTTP client.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// JSON serialization/deserialization errors (custom claims, user records)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid manager configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Validation errors for caller-supplied user attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required attribute is missing
    #[error("Required attribute '{attribute}' is missing")]
    MissingRequiredAttribute { attribute: String },

    /// Attribute is present but empty
    #[error("Attribute '{attribute}' cannot be empty")]
    EmptyValue { attribute: String },

    /// Attribute exceeds its maximum length
    #[error("Attribute '{attribute}' must be at most {max} characters, got {actual}")]
    TooLong {
        attribute: String,
        max: usize,
        actual: usize,
    },

    /// Malformed email address
    #[error("Malformed email address: '{value}'")]
    InvalidEmail { value: String },

    /// Phone number is not in E.164 form
    #[error("Phone number must be E.164 formatted (e.g. +15551234567), got '{value}'")]
    InvalidPhoneNumber { value: String },

    /// Photo URL is not an absolute URL
    #[error("Invalid photo URL '{value}': {details}")]
    InvalidPhotoUrl { value: String, details: String },

    /// Password shorter than the server minimum
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    /// User query carries none of its identifying keys
    #[error("User query must specify one of 'uid', 'email' or 'phone_number'")]
    MissingQueryKey,
}

// Convenience methods for creating common errors
impl AdminError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Raw response attached to a remote outcome error, if any.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::CreateUser { response }
            | Self::UpdateUser { response }
            | Self::ListUsers { response }
            | Self::SetCustomClaims { response }
            | Self::GetUser { response } => Some(response),
            _ => None,
        }
    }

    /// Whether this error was raised by local validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl ValidationError {
    /// Create a missing required attribute error
    pub fn missing_required(attribute: impl Into<String>) -> Self {
        Self::MissingRequiredAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create an empty value error
    pub fn empty(attribute: impl Into<String>) -> Self {
        Self::EmptyValue {
            attribute: attribute.into(),
        }
    }
}

// Result type aliases for convenience
pub type AdminResult<T> = Result<T, AdminError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
