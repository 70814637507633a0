//! Certificate payload: an ordered mapping of string keys to scalar values.
//!
//! The chain treats the payload as opaque. Only its canonical text form
//! participates in hashing, so the backing map is a `BTreeMap`: key order is
//! fixed and the same payload always serializes to the same text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single scalar payload value.
///
/// Variant order matters for untagged deserialization: integers must be
/// tried before floats so that `3` stays an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => write!(f, "{s}"),
            TokenValue::Bool(b) => write!(f, "{b}"),
            TokenValue::Integer(i) => write!(f, "{i}"),
            TokenValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for TokenValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for TokenValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for TokenValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// The certificate payload: string keys mapped to scalar values, ordered by
/// key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenMap(BTreeMap<String, TokenValue>);

impl TokenMap {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TokenValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.0.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the payload has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenValue)> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, TokenValue>> for TokenMap {
    fn from(map: BTreeMap<String, TokenValue>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, TokenValue)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (String, TokenValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
