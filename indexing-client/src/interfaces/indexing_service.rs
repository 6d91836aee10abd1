//! Indexing service trait definition.

use async_trait::async_trait;

use crate::errors::IndexingClientError;
use indexing_client_shared::{SearchRecord, SearchRequest};

/// Abstract interface to the remote indexing service.
///
/// Each method maps to exactly one request against the service. Nothing is
/// retried or cached; failures are returned to the caller as-is.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// across tasks behind an `Arc`.
///
/// # Error Handling
///
/// Transport failures and non-2xx statuses surface as
/// `IndexingClientError::RemoteCallError`. Bodies that do not decode to the
/// expected JSON shape surface as `IndexingClientError::DeserializationError`.
#[async_trait]
pub trait IndexingService: Send + Sync {
    /// Run a keyword search.
    ///
    /// # Arguments
    ///
    /// * `query` - Search text, embedded in the request URL verbatim
    /// * `max_results` - Upper bound on the number of records to return
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SearchRecord>)` - The records returned by the service, in service order
    /// * `Err(IndexingClientError)` - If the call or decoding fails
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchRecord>, IndexingClientError>;

    /// Run a search described by a JSON request body.
    async fn search_post(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchRecord>, IndexingClientError>;

    /// Run a search that the service passes to its engine without rewriting.
    async fn search_raw(&self, query: &str) -> Result<Vec<SearchRecord>, IndexingClientError>;

    /// List the files currently held in the index.
    ///
    /// An empty index yields an empty vector.
    async fn get_indexed_files(&self) -> Result<Vec<String>, IndexingClientError>;

    /// Delete a document from the index.
    ///
    /// # Arguments
    ///
    /// * `document_id` - Identifier of the document, embedded in the request path verbatim
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the service answered with any 2xx status
    /// * `Err(IndexingClientError::RemoteCallError)` - Otherwise
    async fn delete_document(&self, document_id: &str) -> Result<(), IndexingClientError>;
}
