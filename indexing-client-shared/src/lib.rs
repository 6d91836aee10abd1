//! # Indexing Client Shared
//!
//! Wire-level types exchanged with the indexing service. The service owns
//! the schema of every record, so these types carry JSON through untouched.

pub mod types;

pub use types::search_record::SearchRecord;
pub use types::search_request::SearchRequest;
