//! Page retrieval and content extraction.

pub mod extractor;
pub mod http_client;

pub use extractor::{extract, ExtractedPage, UNTITLED_PAGE};
pub use http_client::{validate_url, FetchError, HttpClient, PageFetcher};
