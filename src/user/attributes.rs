//! Caller-supplied user attribute sets for create and update calls.
//!
//! Attributes are collected as raw values and validated all at once when the
//! manager turns them into a request payload. A single invalid field fails
//! the whole call before anything is sent.

use crate::error::ValidationResult;
use crate::user::payload::CompactPayload;
use crate::user::value_objects::{DisplayName, Email, Password, PhoneNumber, PhotoUrl, Uid};
use serde_json::Value;
use std::fmt;

/// Attributes for a new user account.
///
/// Every field is optional. Unset fields are left out of the request, so the
/// server applies its own defaults (including generating a uid).
///
/// ```rust
/// use identity_admin::UserAttributes;
///
/// let attributes = UserAttributes::new()
///     .email("jane@example.com")
///     .display_name("Jane Doe")
///     .email_verified(false);
/// assert_eq!(attributes.email.as_deref(), Some("jane@example.com"));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct UserAttributes {
    pub uid: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub phone_number: Option<String>,
    pub photo_url: Option<String>,
    pub password: Option<String>,
    pub disabled: Option<bool>,
}

impl UserAttributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the uid the account is created under.
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn email_verified(mut self, email_verified: bool) -> Self {
        self.email_verified = Some(email_verified);
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Validate every present field and build the `accounts` request body.
    pub(crate) fn to_create_payload(&self) -> ValidationResult<Value> {
        let mut payload = CompactPayload::new();
        payload
            .insert("localId", validate(&self.uid, Uid::new)?.map(Uid::into_string))
            .insert(
                "displayName",
                validate(&self.display_name, DisplayName::new)?.map(|d| d.as_str().to_string()),
            )
            .insert("email", validate(&self.email, Email::new)?.map(Email::into_string))
            .insert("emailVerified", self.email_verified)
            .insert(
                "phoneNumber",
                validate(&self.phone_number, PhoneNumber::new)?.map(PhoneNumber::into_string),
            )
            .insert(
                "photoUrl",
                validate(&self.photo_url, PhotoUrl::new)?.map(PhotoUrl::into_string),
            )
            .insert(
                "password",
                validate(&self.password, Password::new)?.map(|p| p.expose().to_string()),
            )
            .insert("disabled", self.disabled);
        Ok(payload.into_value())
    }
}

/// Mutable attributes of an existing user account.
///
/// Like [`UserAttributes`] without the uid, which is passed separately to
/// [`UserManager::update_user`](crate::UserManager::update_user).
#[derive(Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub phone_number: Option<String>,
    pub photo_url: Option<String>,
    pub password: Option<String>,
    pub disabled: Option<bool>,
}

impl UserUpdate {
    /// Create an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn email_verified(mut self, email_verified: bool) -> Self {
        self.email_verified = Some(email_verified);
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Validate every present field and build the `accounts:update` body.
    ///
    /// The endpoint names the disabled flag `disableUser` on update.
    pub(crate) fn to_update_payload(&self, uid: &Uid) -> ValidationResult<Value> {
        let mut payload = CompactPayload::new();
        payload
            .insert("localId", Some(uid.as_str()))
            .insert(
                "displayName",
                validate(&self.display_name, DisplayName::new)?.map(|d| d.as_str().to_string()),
            )
            .insert("email", validate(&self.email, Email::new)?.map(Email::into_string))
            .insert("emailVerified", self.email_verified)
            .insert(
                "phoneNumber",
                validate(&self.phone_number, PhoneNumber::new)?.map(PhoneNumber::into_string),
            )
            .insert(
                "photoUrl",
                validate(&self.photo_url, PhotoUrl::new)?.map(PhotoUrl::into_string),
            )
            .insert(
                "password",
                validate(&self.password, Password::new)?.map(|p| p.expose().to_string()),
            )
            .insert("disableUser", self.disabled);
        Ok(payload.into_value())
    }
}

fn validate<T>(
    value: &Option<String>,
    parse: impl FnOnce(String) -> ValidationResult<T>,
) -> ValidationResult<Option<T>> {
    value.clone().map(parse).transpose()
}

fn redacted(password: &Option<String>) -> Option<&'static str> {
    password.as_ref().map(|_| "<redacted>")
}

impl fmt::Debug for UserAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAttributes")
            .field("uid", &self.uid)
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("email_verified", &self.email_verified)
            .field("phone_number", &self.phone_number)
            .field("photo_url", &self.photo_url)
            .field("password", &redacted(&self.password))
            .field("disabled", &self.disabled)
            .finish()
    }
}

impl fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdate")
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("email_verified", &self.email_verified)
            .field("phone_number", &self.phone_number)
            .field("photo_url", &self.photo_url)
            .field("password", &redacted(&self.password))
            .field("disabled", &self.disabled)
            .finish()
    }
}
