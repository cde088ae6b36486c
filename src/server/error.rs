//! Mapping of failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use crate::repository::StoreError;
use crate::services::ScrapeError;

/// Error returned by API handlers, rendered as `{"error": "<reason>"}`.
#[derive(Debug)]
pub enum ApiError {
    /// The request was malformed.
    BadRequest(String),
    /// The write path failed.
    Scrape(ScrapeError),
    /// A read from one of the stores failed.
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Scrape(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Scrape(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Scrape(e) => e.to_string(),
            ApiError::Store(e) => e.to_string(),
        }
    }
}

impl From<ScrapeError> for ApiError {
    fn from(err: ScrapeError) -> Self {
        ApiError::Scrape(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StoreKind;
    use crate::scrapers::FetchError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::BadRequest("URL is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ScrapeError::from(FetchError::InvalidUrl("x".into()))).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ScrapeError::from(FetchError::NotFound)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(ScrapeError::StoreWrite {
                store: StoreKind::FullText,
                source: StoreError::Database(diesel::result::Error::NotFound),
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_is_human_readable() {
        let err = ApiError::from(ScrapeError::from(FetchError::Forbidden));
        assert_eq!(err.message(), "Access forbidden (403)");
    }
}
