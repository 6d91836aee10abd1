//! Search record type.

use serde_json::{Map, Value};

/// A single hit returned by the indexing service.
///
/// The field set is defined by the remote service and is never inspected
/// here; records are handed to callers exactly as they were received.
pub type SearchRecord = Map<String, Value>;
