use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// Page-embedded fallback documents, keyed by content area.
///
/// The page build embeds one JSON document per content area; the store is
/// assembled once during page setup and only read afterwards. A missing or
/// malformed document is not an error, it just means no fallback exists for
/// that key.
#[derive(Clone, Debug, Default)]
pub struct FallbackStore {
    documents: HashMap<String, String>,
}

impl FallbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `(key, raw JSON text)` documents.
    pub fn from_documents<I, K, V>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|(key, raw)| (key.into(), raw.into()))
                .collect(),
        }
    }

    /// Adds one embedded document. Page setup only; the store must not
    /// change once controllers share it.
    pub fn insert(&mut self, key: impl Into<String>, raw_json: impl Into<String>) {
        self.documents.insert(key.into(), raw_json.into());
    }

    /// Looks up and parses the document for `key`.
    pub fn get(&self, key: &str) -> Option<JsonValue> {
        let raw = match self.documents.get(key) {
            Some(raw) => raw,
            None => {
                tracing::debug!(key, "no fallback document embedded");
                return None;
            }
        };
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "fallback document is not valid JSON");
                None
            }
        }
    }

    /// Looks up `key` and decodes it into the content area's shape. A
    /// payload of the wrong shape counts as no fallback.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                tracing::warn!(key, error = %err, "fallback document does not match the expected shape");
                None
            }
        }
    }
}
