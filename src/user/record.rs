//! Read-only view over a user object returned by the identity endpoint.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A user account as reported by the server.
///
/// Records are built only from response payloads and are never modified.
/// Fields the server omits take their documented defaults (`false` for
/// flags, `None` for optional strings).
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    inner: RawUser,
    raw: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    local_id: String,
    email: Option<String>,
    #[serde(default)]
    email_verified: bool,
    display_name: Option<String>,
    photo_url: Option<String>,
    phone_number: Option<String>,
    #[serde(default)]
    disabled: bool,
    custom_attributes: Option<String>,
    tenant_id: Option<String>,
    created_at: Option<String>,
    last_login_at: Option<String>,
    last_refresh_at: Option<String>,
    #[serde(default)]
    provider_user_info: Vec<ProviderUserInfo>,
}

/// Sign-in provider linked to a user account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderUserInfo {
    pub provider_id: String,
    pub raw_id: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub phone_number: Option<String>,
}

impl UserRecord {
    /// Build a record from one decoded user object.
    ///
    /// Fails if the object is not a JSON object or has no `localId`.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let inner = RawUser::deserialize(&value)?;
        Ok(Self { inner, raw: value })
    }

    pub fn uid(&self) -> &str {
        &self.inner.local_id
    }

    pub fn email(&self) -> Option<&str> {
        self.inner.email.as_deref()
    }

    pub fn email_verified(&self) -> bool {
        self.inner.email_verified
    }

    pub fn display_name(&self) -> Option<&str> {
        self.inner.display_name.as_deref()
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.inner.photo_url.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.inner.phone_number.as_deref()
    }

    pub fn disabled(&self) -> bool {
        self.inner.disabled
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.inner.tenant_id.as_deref()
    }

    pub fn provider_data(&self) -> &[ProviderUserInfo] {
        &self.inner.provider_user_info
    }

    /// Custom claims decoded from the stored `customAttributes` string.
    ///
    /// Returns `None` when no claims are set or the stored string is not a
    /// JSON object.
    pub fn custom_claims(&self) -> Option<Map<String, Value>> {
        let attributes = self.inner.custom_attributes.as_deref()?;
        match serde_json::from_str::<Value>(attributes) {
            Ok(Value::Object(claims)) => Some(claims),
            _ => None,
        }
    }

    /// Account creation time.
    pub fn creation_time(&self) -> Option<DateTime<Utc>> {
        self.inner.created_at.as_deref().and_then(parse_millis)
    }

    /// Time of the last sign-in.
    pub fn last_sign_in_time(&self) -> Option<DateTime<Utc>> {
        self.inner.last_login_at.as_deref().and_then(parse_millis)
    }

    /// Time the account last refreshed its ID token.
    pub fn last_refresh_time(&self) -> Option<DateTime<Utc>> {
        let value = self.inner.last_refresh_at.as_deref()?;
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|time| time.with_timezone(&Utc))
    }

    /// The user object exactly as the server returned it.
    pub fn as_json(&self) -> &Value {
        &self.raw
    }
}

// Timestamps other than lastRefreshAt are epoch milliseconds sent as strings.
fn parse_millis(value: &str) -> Option<DateTime<Utc>> {
    let millis = value.parse::<i64>().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}
