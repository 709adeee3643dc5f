//! Loosely-typed style configuration objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered map of configuration fields, as received by an element.
pub type Props = serde_json::Map<String, Value>;

/// A style configuration object.
///
/// Holds any fields at all: recognized style keys are turned into class
/// tokens by [`assemble`](crate::assemble()), everything else passes
/// through untouched.
///
/// # Example
///
/// ```rust
/// use bulmers::StyleConfig;
///
/// let config = StyleConfig::new()
///     .with("color", "primary")
///     .with("m", 2)
///     .with("id", "hero");
///
/// assert_eq!(config.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleConfig {
    fields: Props,
}

impl StyleConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the updated configuration for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a field in place, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the underlying field map.
    pub fn fields(&self) -> &Props {
        &self.fields
    }

    pub fn into_fields(self) -> Props {
        self.fields
    }

    /// Parses a configuration from a JSON object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl From<Props> for StyleConfig {
    fn from(fields: Props) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for StyleConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
