//! User lookup queries.
//!
//! A lookup targets exactly one identifying key. When a query has several
//! keys set, the first one in the order uid, email, phone number is used and
//! the rest are ignored.

use crate::error::{ValidationError, ValidationResult};
use crate::user::value_objects::{Email, PhoneNumber, Uid};
use serde_json::{Value, json};

/// Descriptor for [`UserManager::get_user_by`](crate::UserManager::get_user_by).
///
/// ```rust
/// use identity_admin::UserQuery;
///
/// let query = UserQuery::by_email("jane@example.com");
/// assert!(query.uid.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub uid: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UserQuery {
    /// Query with no key set. Resolving it fails.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            ..Self::default()
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn by_phone_number(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            ..Self::default()
        }
    }

    /// Select and validate the key this query resolves to.
    pub fn resolve(&self) -> ValidationResult<LookupKey> {
        if let Some(uid) = &self.uid {
            return Ok(LookupKey::Uid(Uid::new(uid.clone())?));
        }
        if let Some(email) = &self.email {
            return Ok(LookupKey::Email(Email::new(email.clone())?));
        }
        if let Some(phone_number) = &self.phone_number {
            return Ok(LookupKey::PhoneNumber(PhoneNumber::new(phone_number.clone())?));
        }
        Err(ValidationError::MissingQueryKey)
    }
}

/// The single validated key a lookup is sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Uid(Uid),
    Email(Email),
    PhoneNumber(PhoneNumber),
}

impl LookupKey {
    /// External field name of the key.
    pub fn field_name(&self) -> &'static str {
        match self {
            LookupKey::Uid(_) => "localId",
            LookupKey::Email(_) => "email",
            LookupKey::PhoneNumber(_) => "phoneNumber",
        }
    }

    /// `accounts:lookup` body. The endpoint takes arrays; one value is sent.
    pub(crate) fn to_payload(&self) -> Value {
        match self {
            LookupKey::Uid(uid) => json!({ "localId": [uid] }),
            LookupKey::Email(email) => json!({ "email": [email] }),
            LookupKey::PhoneNumber(phone) => json!({ "phoneNumber": [phone] }),
        }
    }
}
