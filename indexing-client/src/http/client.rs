//! HTTP client implementation.
//!
//! This module provides the concrete implementation of `IndexingService`
//! on top of `reqwest`.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use crate::config::IndexingClientConfig;
use crate::errors::IndexingClientError;
use crate::http::endpoints;
use crate::interfaces::IndexingService;
use indexing_client_shared::{SearchRecord, SearchRequest};

/// HTTP client for the indexing service.
///
/// Holds the validated base URL and a `reqwest::Client` whose connection pool
/// is shared by every call. Cloning is cheap and clones share the pool.
///
/// # Example
///
/// ```ignore
/// use indexing_client::{HttpIndexingClient, IndexingClientConfig, IndexingService};
///
/// let client = HttpIndexingClient::new(IndexingClientConfig::from_env())?;
/// let hits = client.search("quarterly", 10).await?;
/// println!("Found {} records", hits.len());
/// ```
#[derive(Debug, Clone)]
pub struct HttpIndexingClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIndexingClient {
    /// Create a client with a freshly built `reqwest::Client`.
    ///
    /// # Returns
    ///
    /// * `Ok(HttpIndexingClient)` - A new client instance
    /// * `Err(IndexingClientError::ConfigError)` - If the base URL is invalid or
    ///   the HTTP client cannot be built
    pub fn new(config: IndexingClientConfig) -> Result<Self, IndexingClientError> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            IndexingClientError::config(format!("Failed to build HTTP client: {}", e))
        })?;
        Self::with_http_client(config, client)
    }

    /// Create a client that sends requests through an existing `reqwest::Client`.
    pub fn with_http_client(
        config: IndexingClientConfig,
        client: reqwest::Client,
    ) -> Result<Self, IndexingClientError> {
        let base_url = config.validated_base_url()?;

        info!(base_url = %base_url, "Created indexing service client");

        Ok(Self { client, base_url })
    }

    /// The normalised base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and fail on transport errors or non-2xx statuses.
    async fn send(&self, request: RequestBuilder) -> Result<Response, IndexingClientError> {
        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Indexing service request failed");
            IndexingClientError::remote_call(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Indexing service returned an error");
            return Err(IndexingClientError::remote_status(status.as_u16(), error_body));
        }

        Ok(response)
    }

    /// Read the whole body and decode it as `T`.
    ///
    /// A body read failure is a transport failure; only a body that arrived
    /// but does not decode is a deserialization error.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, IndexingClientError> {
        let body = response
            .bytes()
            .await
            .map_err(|e| IndexingClientError::remote_call(format!("Failed to read body: {}", e)))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, body_len = body.len(), "Failed to decode indexing service response");
            IndexingClientError::from(e)
        })
    }

    async fn fetch_records(
        &self,
        request: RequestBuilder,
    ) -> Result<Vec<SearchRecord>, IndexingClientError> {
        let response = self.send(request).await?;
        let records: Vec<SearchRecord> = Self::decode(response).await?;

        debug!(count = records.len(), "Search returned records");
        Ok(records)
    }
}

#[async_trait]
impl IndexingService for HttpIndexingClient {
    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchRecord>, IndexingClientError> {
        let url = endpoints::search_url(&self.base_url, query, max_results);
        self.fetch_records(self.client.get(url)).await
    }

    #[instrument(skip(self, request), fields(field_count = request.len()))]
    async fn search_post(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchRecord>, IndexingClientError> {
        let url = endpoints::search_query_url(&self.base_url);
        // `json` sets `Content-Type: application/json`.
        self.fetch_records(self.client.post(url).json(request)).await
    }

    #[instrument(skip(self))]
    async fn search_raw(&self, query: &str) -> Result<Vec<SearchRecord>, IndexingClientError> {
        let url = endpoints::search_raw_url(&self.base_url, query);
        self.fetch_records(self.client.get(url)).await
    }

    #[instrument(skip(self))]
    async fn get_indexed_files(&self) -> Result<Vec<String>, IndexingClientError> {
        let url = endpoints::indexed_files_url(&self.base_url);
        let response = self.send(self.client.get(url)).await?;
        let files: Vec<String> = Self::decode(response).await?;

        debug!(count = files.len(), "Listed indexed files");
        Ok(files)
    }

    #[instrument(skip(self))]
    async fn delete_document(&self, document_id: &str) -> Result<(), IndexingClientError> {
        let url = endpoints::document_url(&self.base_url, document_id);
        let response = self.send(self.client.delete(url)).await?;

        debug!(status = %response.status(), "Document deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_new_normalises_base_url() {
        let client =
            HttpIndexingClient::new(IndexingClientConfig::new("http://localhost:8082/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8082");
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let err = HttpIndexingClient::new(IndexingClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, IndexingClientError::ConfigError(_)));
    }

    #[test]
    fn test_default_config_builds() {
        let client = HttpIndexingClient::new(IndexingClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://indexing-service:8082");
    }

    #[test]
    fn test_usable_as_trait_object() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<HttpIndexingClient>();

        let client = HttpIndexingClient::new(IndexingClientConfig::default()).unwrap();
        let shared: Arc<dyn IndexingService> = Arc::new(client);
        assert_eq!(Arc::strong_count(&shared), 1);
    }
}
