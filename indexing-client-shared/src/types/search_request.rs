//! Search request body types.
//!
//! The indexing service accepts an arbitrary JSON object on its query
//! endpoint. `SearchRequest` wraps that object and serializes as the bare map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a `POST /api/search/query` call.
///
/// Serializes transparently: the wire body is exactly the wrapped object,
/// with no envelope.
///
/// # Example
///
/// ```
/// use indexing_client_shared::SearchRequest;
/// use serde_json::json;
///
/// let request = SearchRequest::new()
///     .with_field("query", "quarterly report")
///     .with_field("maxResults", 10)
///     .with_field("filters", json!({ "type": "pdf" }));
///
/// assert_eq!(request.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchRequest {
    fields: Map<String, Value>,
}

impl SearchRequest {
    /// Create an empty request body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value under the same key.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a field from any serializable value.
    ///
    /// Fails when the value cannot be represented as JSON (for example a map
    /// with non-string keys).
    pub fn try_with_field<T: Serialize>(
        mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        self.fields.insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the request and return the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for SearchRequest {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
