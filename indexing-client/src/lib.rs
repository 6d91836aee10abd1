//! # Indexing Client
//!
//! Outbound client for the indexing service. It turns search and
//! document-management calls into REST requests against the service and
//! hands back the decoded JSON untouched.
//!
//! The crate is split into a configuration type, an error type, the
//! `IndexingService` trait that callers depend on, and the reqwest-backed
//! `HttpIndexingClient` implementation.

pub mod config;
pub mod errors;
pub mod http;
pub mod interfaces;

pub use config::{IndexingClientConfig, DEFAULT_INDEXING_SERVICE_URL};
pub use errors::IndexingClientError;
pub use http::{encode_query_value, HttpIndexingClient};
pub use interfaces::IndexingService;

pub use indexing_client_shared::{SearchRecord, SearchRequest};
