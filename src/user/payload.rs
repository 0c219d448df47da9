//! Compact request payload construction.
//!
//! Write operations send only the attributes the caller actually supplied.
//! [`CompactPayload`] is the single place that rule lives: absent values are
//! skipped, never serialized as `null`.

use serde_json::{Map, Value};

/// JSON object builder that drops absent values.
#[derive(Debug, Default)]
pub(crate) struct CompactPayload(Map<String, Value>);

impl CompactPayload {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key` if present.
    pub(crate) fn insert<V: Into<Value>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.0.insert(key.to_string(), value.into());
        }
        self
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
