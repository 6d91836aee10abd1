//! Interface definitions for the indexing client.
//!
//! Callers depend on the `IndexingService` trait rather than on the HTTP
//! implementation, so tests and alternate transports can be swapped in.

mod indexing_service;

pub use indexing_service::IndexingService;
