//! reqwest implementation of the indexing service client.
//!
//! This module provides `HttpIndexingClient`, the concrete implementation of
//! `IndexingService` that talks to the indexing service over HTTP.

mod client;
mod endpoints;

pub use client::HttpIndexingClient;
pub use endpoints::encode_query_value;
