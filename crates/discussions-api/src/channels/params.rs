//! Channel creation parameters and their validation.

use super::schema::{CHANNEL_TYPE_KEY, ChannelSchema, ChannelType};
use crate::error::ValidationError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Attributes for a new channel, kept in insertion order.
///
/// Serializes as a plain JSON object, which is the request body for channel creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChannelParams(Map<String, Value>);

impl ChannelParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `channel_type` from the typed enum.
    pub fn channel_type(self, kind: ChannelType) -> Self {
        self.with(CHANNEL_TYPE_KEY, kind.as_str())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Check these parameters against `schema`.
    ///
    /// Rejects, in order: an empty set, the first key outside the recognized
    /// attributes, then a missing or unrecognized `channel_type`.
    pub fn validate(&self, schema: &ChannelSchema) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyAttributes);
        }

        if let Some(key) = self.keys().find(|key| !schema.is_attribute(key)) {
            return Err(ValidationError::UnsupportedAttribute {
                key: key.to_string(),
            });
        }

        match self.get(CHANNEL_TYPE_KEY) {
            Some(Value::String(kind)) if schema.is_channel_type(kind) => Ok(()),
            Some(Value::String(kind)) => Err(ValidationError::InvalidChannelType {
                value: Some(kind.clone()),
            }),
            Some(other) => Err(ValidationError::InvalidChannelType {
                value: Some(other.to_string()),
            }),
            None => Err(ValidationError::InvalidChannelType { value: None }),
        }
    }
}

impl From<Map<String, Value>> for ChannelParams {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for ChannelParams
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
