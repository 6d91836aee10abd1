//! URL builders for the indexing service endpoints.
//!
//! Values are embedded verbatim. Callers that pass free text should encode it
//! first with [`encode_query_value`].

pub(crate) const SEARCH_PATH: &str = "/api/search";
pub(crate) const SEARCH_QUERY_PATH: &str = "/api/search/query";
pub(crate) const SEARCH_RAW_PATH: &str = "/api/search/raw";
pub(crate) const INDEXED_FILES_PATH: &str = "/api/search/files";
pub(crate) const DOCUMENTS_PATH: &str = "/api/search/documents";

/// `GET {base}/api/search?q={query}&maxResults={max_results}`
pub(crate) fn search_url(base_url: &str, query: &str, max_results: u32) -> String {
    format!(
        "{}{}?q={}&maxResults={}",
        base_url, SEARCH_PATH, query, max_results
    )
}

/// `POST {base}/api/search/query`
pub(crate) fn search_query_url(base_url: &str) -> String {
    format!("{}{}", base_url, SEARCH_QUERY_PATH)
}

/// `GET {base}/api/search/raw?q={query}`
pub(crate) fn search_raw_url(base_url: &str, query: &str) -> String {
    format!("{}{}?q={}", base_url, SEARCH_RAW_PATH, query)
}

/// `GET {base}/api/search/files`
pub(crate) fn indexed_files_url(base_url: &str) -> String {
    format!("{}{}", base_url, INDEXED_FILES_PATH)
}

/// `DELETE {base}/api/search/documents/{document_id}`
pub(crate) fn document_url(base_url: &str, document_id: &str) -> String {
    format!("{}{}/{}", base_url, DOCUMENTS_PATH, document_id)
}

/// Percent-encode a value for use as a query parameter or path segment.
///
/// # Example
///
/// ```
/// use indexing_client::encode_query_value;
///
/// assert_eq!(encode_query_value("rust & tokio"), "rust%20%26%20tokio");
/// ```
pub fn encode_query_value(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://indexing-service:8082";

    #[test]
    fn test_search_url_embeds_both_parameters() {
        assert_eq!(
            search_url(BASE, "kafka", 25),
            "http://indexing-service:8082/api/search?q=kafka&maxResults=25"
        );
    }

    #[test]
    fn test_search_url_keeps_query_verbatim() {
        assert_eq!(
            search_url(BASE, "a%20b", 1),
            "http://indexing-service:8082/api/search?q=a%20b&maxResults=1"
        );
    }

    #[test]
    fn test_search_raw_url_has_no_max_results() {
        let url = search_raw_url(BASE, "title:report");
        assert_eq!(url, "http://indexing-service:8082/api/search/raw?q=title:report");
        assert!(!url.contains("maxResults"));
    }

    #[test]
    fn test_fixed_paths() {
        assert_eq!(
            search_query_url(BASE),
            "http://indexing-service:8082/api/search/query"
        );
        assert_eq!(
            indexed_files_url(BASE),
            "http://indexing-service:8082/api/search/files"
        );
    }

    #[test]
    fn test_document_url_templates_id() {
        assert_eq!(
            document_url(BASE, "abc"),
            "http://indexing-service:8082/api/search/documents/abc"
        );
    }

    #[test]
    fn test_encode_query_value() {
        assert_eq!(encode_query_value("annual report"), "annual%20report");
        assert_eq!(encode_query_value("a/b?c=d"), "a%2Fb%3Fc%3Dd");
        assert_eq!(encode_query_value("plain"), "plain");
    }
}
