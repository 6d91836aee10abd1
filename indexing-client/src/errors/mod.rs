//! Error types for the indexing client.

mod indexing_client_error;

pub use indexing_client_error::IndexingClientError;
