//! Types passed between the orchestrator and the indexing service.

pub mod search_record;
pub mod search_request;

pub use search_record::SearchRecord;
pub use search_request::SearchRequest;
